use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// Represents one stored chat transcript: an ordered conversation for a session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TranscriptDocument {
    /// The unique identifier for the transcript (UUID).
    pub id: String,
    /// Opaque identifier of the chat session this transcript belongs to.
    pub session_id: String,
    /// The ordered message sequence, stored as-is. Upstream writers do not
    /// guarantee the shape; anything that is not an array of messages must be
    /// tolerated by consumers.
    pub messages: Json<Value>,
    /// Unix timestamp of when the transcript was stored.
    pub created_at: i64,
}

/// Represents a single turn within a transcript, tagged by originator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// Originator tag: "human", "ai", or anything else (ignored by the
    /// statistics pass).
    #[serde(rename = "type")]
    pub kind: String,
    /// Untyped payload: a plain string, or an arbitrarily nested mapping
    /// with the text buried somewhere inside.
    #[serde(default)]
    pub data: Value,
}
