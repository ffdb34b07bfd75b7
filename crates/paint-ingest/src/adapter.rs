//! Upstream payload adapters.

use paint_core::{RawRecord, SourceConfig, SourceFormat};
use serde_json::Value;

use crate::error::IngestError;
use crate::parser::RowParser;

/// Decodes an upstream body into raw records.
pub trait SourceAdapter: Send + Sync {
    /// Decode `body` into records in source order.
    fn records(&self, body: &[u8]) -> Result<Vec<RawRecord>, IngestError>;

    /// Media type to request from the upstream.
    fn accept(&self) -> &'static str;
}

/// Adapter for a JSON array of row objects (e.g. opensheet exports).
///
/// A valid JSON document that is not an array yields no records. Within the
/// array, non-object elements are skipped; strings are kept, numbers and
/// booleans are stringified, and nulls or nested values are omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredRowsAdapter;

impl SourceAdapter for StructuredRowsAdapter {
    fn records(&self, body: &[u8]) -> Result<Vec<RawRecord>, IngestError> {
        let value: Value = serde_json::from_slice(body)?;

        let rows = match value {
            Value::Array(rows) => rows,
            _ => return Ok(Vec::new()),
        };

        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(cells) => Some(
                    cells
                        .into_iter()
                        .filter_map(|(column, cell)| cell_text(cell).map(|text| (column, text)))
                        .collect::<RawRecord>(),
                ),
                _ => None,
            })
            .collect())
    }

    fn accept(&self) -> &'static str {
        "application/json"
    }
}

fn cell_text(cell: Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Adapter for header-first delimited text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedTextAdapter {
    parser: RowParser,
}

impl DelimitedTextAdapter {
    /// Create an adapter splitting on `delimiter`.
    pub fn new(delimiter: char) -> Self {
        Self {
            parser: RowParser::new(delimiter),
        }
    }
}

impl SourceAdapter for DelimitedTextAdapter {
    fn records(&self, body: &[u8]) -> Result<Vec<RawRecord>, IngestError> {
        let text =
            std::str::from_utf8(body).map_err(|e| IngestError::Encoding(e.to_string()))?;
        Ok(self.parser.parse(text))
    }

    fn accept(&self) -> &'static str {
        "text/csv"
    }
}

/// Pick the adapter matching the configured source format.
pub fn adapter_for(source: &SourceConfig) -> Box<dyn SourceAdapter> {
    match source.format {
        SourceFormat::Rows => Box::new(StructuredRowsAdapter),
        SourceFormat::Delimited => Box::new(DelimitedTextAdapter::new(source.delimiter)),
    }
}
