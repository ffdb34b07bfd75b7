//! Route cache policies and the directives derived from them.

use std::collections::BTreeMap;
use std::time::Duration;

use paint_core::CacheSettings;
use serde::{Deserialize, Serialize};

use crate::headers::header_names;

/// Cache scope determining who can cache the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// Cacheable by CDN and browser (shared cache).
    Public,
    /// No caching.
    #[default]
    None,
}

impl CacheScope {
    /// Get the Cache-Control directive for this scope.
    pub fn cache_control_directive(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::None => "no-store",
        }
    }

    /// Check if this scope allows any caching.
    pub fn allows_caching(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Route-level cache policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCachePolicy {
    /// Whether caching is enabled.
    pub enabled: bool,
    /// Cache scope.
    pub scope: CacheScope,
    /// Time-to-live for cached responses.
    pub ttl: Duration,
    /// Stale-while-revalidate window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<Duration>,
    /// Force every cache layer, including proxies and legacy HTTP/1.0
    /// caches, to go back to the origin.
    pub bypass: bool,
}

impl Default for RouteCachePolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            scope: CacheScope::None,
            ttl: Duration::from_secs(0),
            stale_while_revalidate: None,
            bypass: false,
        }
    }
}

impl RouteCachePolicy {
    /// Create a policy with no caching.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create a policy that defeats caching at every layer.
    pub fn bypass() -> Self {
        Self {
            bypass: true,
            ..Default::default()
        }
    }

    /// Create a public cache policy.
    pub fn public(ttl: Duration) -> Self {
        Self {
            enabled: true,
            scope: CacheScope::Public,
            ttl,
            ..Default::default()
        }
    }

    /// Build the success policy from configured lifetimes.
    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::public(Duration::from_secs(settings.max_age_secs))
            .with_swr(Duration::from_secs(settings.stale_while_revalidate_secs))
    }

    /// Set stale-while-revalidate window.
    pub fn with_swr(mut self, duration: Duration) -> Self {
        self.stale_while_revalidate = Some(duration);
        self
    }

    /// Check if responses under this policy may be stored.
    pub fn is_cacheable(&self) -> bool {
        self.enabled && self.scope.allows_caching() && !self.bypass
    }

    /// Generate Cache-Control header value.
    pub fn cache_control_header(&self) -> String {
        if self.bypass {
            return "no-store, no-cache, must-revalidate, proxy-revalidate".to_string();
        }

        if !self.is_cacheable() {
            return "no-store".to_string();
        }

        let mut parts = vec![self.scope.cache_control_directive().to_string()];

        parts.push(format!("max-age={}", self.ttl.as_secs()));

        if let Some(swr) = self.stale_while_revalidate {
            parts.push(format!("stale-while-revalidate={}", swr.as_secs()));
        }

        parts.join(", ")
    }
}

/// Header directives attached to an endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDirectives {
    /// Cache-Control header value.
    pub cache_control: String,
    /// Additional cache headers (e.g. `Pragma`, `Expires`).
    pub extra: BTreeMap<String, String>,
}

impl CacheDirectives {
    /// Derive directives from a policy.
    pub fn from_policy(policy: &RouteCachePolicy) -> Self {
        let mut extra = BTreeMap::new();
        if policy.bypass {
            extra.insert(header_names::PRAGMA.to_string(), "no-cache".to_string());
            extra.insert(header_names::EXPIRES.to_string(), "0".to_string());
        }

        Self {
            cache_control: policy.cache_control_header(),
            extra,
        }
    }

    /// Directives for a successful response.
    ///
    /// A forced refresh disables caching everywhere; otherwise the response
    /// is publicly cacheable for the configured lifetime.
    pub fn for_request(force_refresh: bool, settings: &CacheSettings) -> Self {
        if force_refresh {
            Self::from_policy(&RouteCachePolicy::bypass())
        } else {
            Self::from_policy(&RouteCachePolicy::from_settings(settings))
        }
    }

    /// Directives for an error response. Errors are never stored.
    pub fn for_error() -> Self {
        Self::from_policy(&RouteCachePolicy::none())
    }

    /// Flatten into `(name, value)` pairs, Cache-Control first.
    pub fn to_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            header_names::CACHE_CONTROL.to_string(),
            self.cache_control.clone(),
        )];
        headers.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        headers
    }
}
