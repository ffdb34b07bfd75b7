//! Observability for the paint equivalence service.
//!
//! This crate provides:
//! - `StructuredLogger` - Per-request structured logging to stderr
//! - `LogBuilder` - Fluent log entries with typed fields

mod logging;

pub use logging::*;

// Re-export RequestId from paint-core for convenience
pub use paint_core::RequestId;
