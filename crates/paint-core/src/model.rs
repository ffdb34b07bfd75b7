//! Paint equivalence data model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One source row, keyed by column name.
///
/// Produced by a source adapter and consumed immediately by the normalizer.
/// When a column name appears twice, the later value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Get a cell value by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|s| s.as_str())
    }

    /// Number of populated columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

/// A row that passed normalization.
///
/// All three fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    /// Lowercase color key without a leading `#`.
    pub key: String,
    /// Trimmed display name.
    pub name: String,
    /// Trimmed category (paint range).
    pub category: String,
}

/// A named paint within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equivalent {
    pub name: String,
    #[serde(rename = "range")]
    pub category: String,
}

/// All equivalents sharing one normalized color key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintGroup {
    #[serde(rename = "hex")]
    pub key: String,
    pub equivalents: Vec<Equivalent>,
}

impl PaintGroup {
    /// Create a group with no equivalents yet.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            equivalents: Vec::new(),
        }
    }

    /// Append an equivalent, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, category: impl Into<String>) {
        self.equivalents.push(Equivalent {
            name: name.into(),
            category: category.into(),
        });
    }
}
