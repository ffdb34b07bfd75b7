//! Ingestion pipeline for paint equivalence data.
//!
//! This crate provides:
//! - `RowParser` - Delimited text to `RawRecord`s
//! - `normalize` - Field extraction and cleanup, with per-row `Rejection`
//! - `Grouper` - Ordered grouping by normalized color key
//! - `SourceAdapter` - Interchangeable upstream payload decoders
//!
//! # Example
//!
//! ```ignore
//! use paint_core::ColumnMap;
//! use paint_ingest::{group_entries, normalize, RowParser};
//!
//! let records = RowParser::new(',').parse("hex,name,range\n#FF0000,Red,Base\n");
//! let columns = ColumnMap::default();
//! let groups = group_entries(records.iter().filter_map(|r| normalize(r, &columns).ok()));
//! ```

mod adapter;
mod error;
mod group;
mod normalize;
mod parser;

pub use adapter::*;
pub use error::*;
pub use group::*;
pub use normalize::*;
pub use parser::*;
