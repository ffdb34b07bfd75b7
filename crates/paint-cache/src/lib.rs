//! Response cache policy for the paint equivalence service.
//!
//! This crate provides:
//! - `RouteCachePolicy` - Cache-Control rendering for a route
//! - `CacheDirectives` - Header directives derived from the refresh flag
//! - `CacheHeadersBuilder` - Ordered response header list
//!
//! # Example
//!
//! ```ignore
//! use paint_cache::CacheDirectives;
//! use paint_core::CacheSettings;
//!
//! let directives = CacheDirectives::for_request(false, &CacheSettings::default());
//! assert_eq!(
//!     directives.cache_control,
//!     "public, max-age=86400, stale-while-revalidate=3600"
//! );
//! ```

mod headers;
mod policy;

pub use headers::*;
pub use policy::*;
