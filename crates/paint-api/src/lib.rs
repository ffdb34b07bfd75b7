//! Paint equivalence endpoint.
//!
//! Composes the ingestion pipeline behind a single read operation:
//! fetch the sheet, decode it, normalize and group the rows, and attach
//! cache directives derived from the client's refresh flag.
//!
//! # Example
//!
//! ```ignore
//! use paint_api::FetchOrchestrator;
//! use paint_core::{PaintConfig, RequestContext};
//! use paint_data::FixtureFetcher;
//! use paint_observability::StructuredLogger;
//!
//! let ctx = RequestContext::from_path_and_query("/api/paints?refresh=true");
//! let logger = StructuredLogger::new(ctx.request_id.clone());
//! let orchestrator = FetchOrchestrator::new(FixtureFetcher::ok("[]"), PaintConfig::default());
//! let response = orchestrator.handle(&ctx, &logger).await;
//! assert_eq!(response.status, 200);
//! ```

mod error;
mod orchestrator;
mod pipeline;
mod response;

pub use error::PipelineError;
pub use orchestrator::*;
pub use pipeline::*;
pub use response::*;
