//! Spin outbound HTTP transport.

use std::collections::HashMap;

use async_trait::async_trait;
use spin_sdk::http::{Method, Request};

use crate::client::SourceFetcher;
use crate::error::FetchError;
use crate::request::SourceRequest;
use crate::response::Response;

/// Fetcher backed by `spin_sdk::http::send`.
///
/// The host must list the upstream origin in `allowed_outbound_hosts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinFetcher;

impl SpinFetcher {
    /// Create a new fetcher.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl SourceFetcher for SpinFetcher {
    async fn fetch(&self, request: &SourceRequest) -> Result<Response, FetchError> {
        let mut builder = Request::builder();
        builder.method(Method::Get).uri(request.url());
        for (key, value) in request.headers() {
            builder.header(key.as_str(), value.as_str());
        }

        let resp: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let headers: HashMap<String, String> = resp
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(Response::new(*resp.status(), headers, resp.body().to_vec()))
    }
}
