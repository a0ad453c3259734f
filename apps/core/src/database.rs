use crate::config::Config;
use crate::models::TranscriptDocument;
use chrono::Utc;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

pub async fn init_db(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing database at: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transcripts (
            id TEXT PRIMARY KEY,
            session_id TEXT NOT NULL,
            messages JSON NOT NULL,
            created_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(&pool)
    .await?;

    info!("Database initialized and schema applied.");

    Ok(pool)
}

// --- Transcripts ---

pub async fn insert_transcript(
    pool: &SqlitePool,
    session_id: &str,
    messages: Value,
) -> Result<TranscriptDocument, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().timestamp();

    sqlx::query_as::<_, TranscriptDocument>(
        r#"
        INSERT INTO transcripts (id, session_id, messages, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, session_id, messages, created_at
        "#,
    )
    .bind(&id)
    .bind(session_id)
    .bind(Json(messages))
    .bind(created_at)
    .fetch_one(pool)
    .await
}

pub async fn distinct_session_ids(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT session_id FROM transcripts
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn all_transcripts(pool: &SqlitePool) -> Result<Vec<TranscriptDocument>, sqlx::Error> {
    sqlx::query_as::<_, TranscriptDocument>(
        r#"
        SELECT id, session_id, messages, created_at
        FROM transcripts
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
