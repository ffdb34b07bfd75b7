//! Core abstractions for the paint equivalence service.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `RawRecord` / `NormalizedEntry` / `PaintGroup` - Pipeline data model
//! - `PaintConfig` - Source, column and cache configuration
//! - `RequestContext` - Parsed inbound request with a `RequestId`

mod config;
mod context;
mod model;

pub use config::*;
pub use context::*;
pub use model::*;
