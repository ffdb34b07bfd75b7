//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when retrieving the upstream source.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or receive a reply.
    #[error("Request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status.
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// Transport timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// Body could not be read or decoded.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl FetchError {
    /// Build a status error with the canonical reason phrase.
    pub fn status(status: u16) -> Self {
        let status_text = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();
        FetchError::Status {
            status,
            status_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let err = FetchError::status(503);
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = FetchError::status(799);
        assert_eq!(err.to_string(), "HTTP 799: Unknown Status");
    }
}
