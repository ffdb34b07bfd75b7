//! Endpoint response shaping.

use paint_cache::{header_names, CacheDirectives, CacheHeadersBuilder};
use paint_core::{Method, PaintGroup};
use serde::{Deserialize, Serialize};

/// Client-facing message for every pipeline failure.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load paint data";

/// Client-facing message for unsupported methods.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// JSON content type of every endpoint response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Methods the endpoint serves, as sent in `Allow`.
pub const ALLOWED_METHODS: &str = "GET, HEAD";

/// Error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Response payload: grouped data or an error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaintBody {
    Groups(Vec<PaintGroup>),
    Error(ErrorBody),
}

/// Outcome of one endpoint invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON payload.
    pub body: PaintBody,
    /// Cache headers to apply.
    pub directives: CacheDirectives,
    allow: Option<&'static str>,
    include_body: bool,
}

impl PaintResponse {
    /// Successful response carrying `groups`.
    pub fn success(groups: Vec<PaintGroup>, directives: CacheDirectives) -> Self {
        Self {
            status: 200,
            body: PaintBody::Groups(groups),
            directives,
            allow: None,
            include_body: true,
        }
    }

    /// Generic server-error response. Never cached.
    pub fn failure() -> Self {
        Self {
            status: 500,
            body: PaintBody::Error(ErrorBody {
                error: LOAD_ERROR_MESSAGE.to_string(),
            }),
            directives: CacheDirectives::for_error(),
            allow: None,
            include_body: true,
        }
    }

    /// Rejection for a method other than GET or HEAD.
    pub fn method_not_allowed() -> Self {
        Self {
            status: 405,
            body: PaintBody::Error(ErrorBody {
                error: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            }),
            directives: CacheDirectives::for_error(),
            allow: Some(ALLOWED_METHODS),
            include_body: true,
        }
    }

    /// Keep status and headers but send no payload, as HEAD requires.
    pub fn without_body(mut self) -> Self {
        self.include_body = false;
        self
    }

    /// Shape this response for the request method.
    pub fn for_method(self, method: Method) -> Self {
        match method {
            Method::Get => self,
            Method::Head => self.without_body(),
            _ => Self::method_not_allowed(),
        }
    }

    /// Check if this is a success response.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Grouped payload, if this is a success response.
    pub fn groups(&self) -> Option<&[PaintGroup]> {
        match &self.body {
            PaintBody::Groups(groups) => Some(groups),
            PaintBody::Error(_) => None,
        }
    }

    /// Serialize the payload. Empty when the body is suppressed.
    pub fn body_bytes(&self) -> Vec<u8> {
        if !self.include_body {
            return Vec::new();
        }
        serde_json::to_vec(&self.body).unwrap_or_else(|_| {
            format!(r#"{{"error":"{}"}}"#, LOAD_ERROR_MESSAGE).into_bytes()
        })
    }

    /// Response headers: content type, cache directives, `Allow` on a 405,
    /// optional request ID.
    pub fn headers(&self, request_id: Option<&str>) -> Vec<(String, String)> {
        let mut builder = CacheHeadersBuilder::new()
            .content_type(JSON_CONTENT_TYPE)
            .directives(&self.directives);
        if let Some(methods) = self.allow {
            builder = builder.allow(methods);
        }
        if let Some(id) = request_id {
            builder = builder.request_id(id);
        }
        builder.build()
    }

    /// Get a header value this response would send (case-insensitive).
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers(None)
            .into_iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Cache-Control value.
    pub fn cache_control(&self) -> &str {
        &self.directives.cache_control
    }
}

/// Check if a header list carries a cache bypass.
pub fn is_uncached(headers: &[(String, String)]) -> bool {
    headers.iter().any(|(k, v)| {
        k.eq_ignore_ascii_case(header_names::CACHE_CONTROL) && v.contains("no-store")
    })
}
