//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a local
//! `.env` file at startup. Validation runs once when the configuration is
//! loaded; a bad value is a startup failure, never a per-run failure.

use validator::Validate;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://campuschat.sqlite";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration for the analytics backend.
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Connection string for the transcript store.
    #[validate(length(min = 1))]
    pub database_url: String,
    /// Maximum number of pooled database connections.
    #[validate(range(min = 1, max = 32))]
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Loads configuration from `DATABASE_URL` and `DB_MAX_CONNECTIONS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|e| AppError::Config(format!("DB_MAX_CONNECTIONS: {}", e)))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let config = Self {
            database_url,
            db_max_connections,
        };
        config.validate()?;
        Ok(config)
    }
}
