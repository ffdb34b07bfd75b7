//! Response header assembly.

use crate::policy::CacheDirectives;

/// Header names set by the endpoint.
pub mod header_names {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const PRAGMA: &str = "Pragma";
    pub const EXPIRES: &str = "Expires";
    pub const ALLOW: &str = "Allow";
    /// Request ID for log correlation.
    pub const X_REQUEST_ID: &str = "X-Request-ID";
}

/// Builder for endpoint response headers.
#[derive(Debug, Default)]
pub struct CacheHeadersBuilder {
    content_type: Option<String>,
    directives: Option<CacheDirectives>,
    allow: Option<String>,
    request_id: Option<String>,
}

impl CacheHeadersBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set Content-Type header.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Set cache headers from directives.
    pub fn directives(mut self, directives: &CacheDirectives) -> Self {
        self.directives = Some(directives.clone());
        self
    }

    /// Set the Allow header listing accepted methods.
    pub fn allow(mut self, methods: impl Into<String>) -> Self {
        self.allow = Some(methods.into());
        self
    }

    /// Set X-Request-ID header.
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Build the headers.
    pub fn build(self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(ct) = self.content_type {
            headers.push((header_names::CONTENT_TYPE.to_string(), ct));
        }

        if let Some(directives) = self.directives {
            headers.extend(directives.to_headers());
        }

        if let Some(methods) = self.allow {
            headers.push((header_names::ALLOW.to_string(), methods));
        }

        if let Some(id) = self.request_id {
            headers.push((header_names::X_REQUEST_ID.to_string(), id));
        }

        headers
    }
}
