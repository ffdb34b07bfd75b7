//! Pipeline error types.

use paint_data::FetchError;
use paint_ingest::IngestError;
use thiserror::Error;

/// Failures that turn a request into an error response.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Upstream could not be reached or answered with a failure status.
    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] FetchError),

    /// Upstream body could not be decoded.
    #[error("Undecodable source: {0}")]
    Decode(#[from] IngestError),
}

impl PipelineError {
    /// Short machine-readable kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Upstream(FetchError::Status { .. }) => "upstream_status",
            Self::Upstream(_) => "upstream_transport",
            Self::Decode(_) => "decode",
        }
    }
}
