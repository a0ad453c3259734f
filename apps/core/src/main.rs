// CampusChat Analytics Backend Entry Point
// Computes dashboard statistics over the stored transcript corpus.

mod analysis;
mod config;
mod database;
mod error;
mod models;
mod store;

#[cfg(test)]
mod tests;

use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::analysis::compute_stats;
use crate::config::Config;
use crate::error::AppError;
use crate::store::SqliteTranscriptStore;

/// Installs the JSON tracing subscriber. Log lines go to stderr; stdout is
/// reserved for the report.
fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("campuschat-core".into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to install tracing subscriber");
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let pool = database::init_db(&config).await?;
    let store = SqliteTranscriptStore::new(pool);

    let report = compute_stats(&store).await?;

    info!(total_users = report.total_users, "Report ready");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_telemetry();

    if let Err(e) = run().await {
        // Callers get a single opaque failure; details stay in the logs.
        error!("Stats computation failed: {}", e);
        eprintln!("Dashboard calculation failed");
        std::process::exit(1);
    }
}
