use crate::database;
use crate::error::AppError;
use crate::models::TranscriptDocument;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

/// Defines the read interface the statistics engine needs from the transcript store.
///
/// The engine performs exactly one call to each method per aggregation pass. The trait
/// keeps the engine independent of the backing store, allowing an in-memory corpus to
/// stand in during tests.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Returns the distinct session identifiers present in the corpus.
    async fn distinct_session_ids(&self) -> Result<Vec<String>, AppError>;

    /// Returns the full transcript corpus as a point-in-time snapshot.
    async fn all_documents(&self) -> Result<Vec<TranscriptDocument>, AppError>;
}

/// Production store backed by the SQLite transcript table.
pub struct SqliteTranscriptStore {
    pool: SqlitePool,
}

impl SqliteTranscriptStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranscriptStore for SqliteTranscriptStore {
    async fn distinct_session_ids(&self) -> Result<Vec<String>, AppError> {
        Ok(database::distinct_session_ids(&self.pool).await?)
    }

    async fn all_documents(&self) -> Result<Vec<TranscriptDocument>, AppError> {
        Ok(database::all_transcripts(&self.pool).await?)
    }
}
