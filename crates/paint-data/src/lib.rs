//! Upstream fetch abstraction for the paint equivalence service.
//!
//! This crate provides:
//! - `SourceFetcher` - The retrieval capability handed to the orchestrator
//! - `SourceRequest` - Outbound request with optional cache busting
//! - `Response` - Status, headers and body of an upstream reply
//! - `FixtureFetcher` - In-memory fetcher for tests and offline runs
//! - `SpinFetcher` - Spin outbound HTTP transport (wasm32 only)

mod client;
mod error;
mod request;
mod response;
#[cfg(target_arch = "wasm32")]
mod spin;

pub use client::*;
pub use error::FetchError;
pub use request::SourceRequest;
pub use response::Response;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinFetcher;
