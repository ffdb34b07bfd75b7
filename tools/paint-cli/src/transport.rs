//! Native HTTP transport.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use paint_data::{FetchError, Response, SourceFetcher, SourceRequest};
use reqwest::Client;

use crate::config::HttpConfig;

/// Fetcher backed by a reqwest client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Build a client from HTTP settings.
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl SourceFetcher for ReqwestFetcher {
    async fn fetch(&self, request: &SourceRequest) -> Result<Response, FetchError> {
        let mut builder = self.client.get(request.url());
        for (key, value) in request.headers() {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let resp = builder.send().await.map_err(map_error)?;

        let status = resp.status().as_u16();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = resp.bytes().await.map_err(map_body_error)?;

        Ok(Response::new(status, headers, body.to_vec()))
    }
}

/// Map a failure to send the request or receive the status line.
fn map_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Request(e.to_string())
    }
}

/// Map a failure while reading the body of an accepted reply.
fn map_body_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Body(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one connection on loopback, answering with `reply` after `delay`.
    async fn serve_once(reply: &'static [u8], delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                tokio::time::sleep(delay).await;
                let _ = socket.write_all(reply).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}/sheet", addr)
    }

    fn fetcher(timeout_secs: u64) -> ReqwestFetcher {
        ReqwestFetcher::new(&HttpConfig {
            timeout_secs,
            ..HttpConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_status_headers_and_body() {
        let url = serve_once(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Type: text/csv\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
            Duration::ZERO,
        )
        .await;

        let response = fetcher(5).fetch(&SourceRequest::new(url)).await.unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.bytes(), b"[]");
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("text/csv")
        );
    }

    #[tokio::test]
    async fn test_truncated_body_is_body_error() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n[{\"hex\"",
            Duration::ZERO,
        )
        .await;

        let result = fetcher(5).fetch(&SourceRequest::new(url)).await;
        assert!(matches!(result, Err(FetchError::Body(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_refused_connection_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetcher(5)
            .fetch(&SourceRequest::new(format!("http://{}/sheet", addr)))
            .await;
        assert!(matches!(result, Err(FetchError::Request(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let url = serve_once(b"HTTP/1.1 200 OK\r\n\r\n", Duration::from_secs(5)).await;

        let result = fetcher(1).fetch(&SourceRequest::new(url)).await;
        assert!(matches!(result, Err(FetchError::Timeout)), "{:?}", result);
    }
}
