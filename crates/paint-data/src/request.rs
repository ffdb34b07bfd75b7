//! Outbound source request.

/// Query parameter carrying the cache-busting token.
pub const CACHE_BUST_PARAM: &str = "_t";

/// A GET request for the upstream sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRequest {
    url: String,
    headers: Vec<(String, String)>,
    bypass_cache: bool,
}

impl SourceRequest {
    /// Create a request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            bypass_cache: false,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the Accept header.
    pub fn accept(self, media_type: impl Into<String>) -> Self {
        self.header("Accept", media_type)
    }

    /// Make sure no intermediate cache can answer this request.
    ///
    /// Appends `_t=<token>` to the query and asks every hop to revalidate.
    pub fn bypass_cache(mut self, token: i64) -> Self {
        self.url = append_query(&self.url, CACHE_BUST_PARAM, &token.to_string());
        self.bypass_cache = true;
        self.header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
    }

    /// Get the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the request headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Whether the transport must skip its own cache.
    pub fn is_cache_bypassed(&self) -> bool {
        self.bypass_cache
    }
}

fn append_query(url: &str, name: &str, value: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut out = format!("{}{}{}={}", base, separator, name, value);
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
