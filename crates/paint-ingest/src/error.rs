//! Ingestion error types.

use thiserror::Error;

/// Errors that make an upstream payload unusable.
///
/// Payloads that decode but have an unexpected shape are not errors; they
/// produce an empty record set instead.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Body was not valid JSON.
    #[error("Invalid JSON payload: {0}")]
    Json(String),

    /// Body was not valid UTF-8 text.
    #[error("Invalid text encoding: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::Json(e.to_string())
    }
}
