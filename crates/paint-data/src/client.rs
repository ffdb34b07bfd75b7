//! Source retrieval capability.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::request::SourceRequest;
use crate::response::Response;

/// Retrieves the upstream source.
///
/// Implementations return any reply the transport received, including
/// non-success statuses; callers decide what counts as failure. Futures are
/// not required to be `Send` so that single-threaded hosts (Spin) can
/// implement this directly.
#[async_trait(?Send)]
pub trait SourceFetcher {
    /// Perform one GET for `request`.
    async fn fetch(&self, request: &SourceRequest) -> Result<Response, FetchError>;
}

/// Canned reply for a `FixtureFetcher`.
#[derive(Debug, Clone)]
enum Fixture {
    Reply(Response),
    Unreachable(String),
}

/// Fetcher answering every request with the same canned reply.
///
/// Records each request it receives so tests can inspect what was sent.
#[derive(Debug)]
pub struct FixtureFetcher {
    fixture: Fixture,
    seen: Mutex<Vec<SourceRequest>>,
}

impl FixtureFetcher {
    /// Reply `200 OK` with `body`.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::reply(Response::ok(body))
    }

    /// Reply with an empty body and the given status.
    pub fn status(status: u16) -> Self {
        Self::reply(Response::new(status, Default::default(), Vec::new()))
    }

    /// Reply with a full response.
    pub fn reply(response: Response) -> Self {
        Self {
            fixture: Fixture::Reply(response),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request at the transport level.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            fixture: Fixture::Unreachable(message.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<SourceRequest> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl SourceFetcher for FixtureFetcher {
    async fn fetch(&self, request: &SourceRequest) -> Result<Response, FetchError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }

        match &self.fixture {
            Fixture::Reply(response) => Ok(response.clone()),
            Fixture::Unreachable(message) => Err(FetchError::Request(message.clone())),
        }
    }
}
