//! Record normalization.

use paint_core::{ColumnMap, NormalizedEntry, RawRecord};

/// Why a record was left out of the grouped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Color key missing or empty after stripping `#`.
    MissingKey,
    /// Name missing or blank.
    MissingName,
    /// Category missing or blank.
    MissingCategory,
}

/// Extract and clean the three pipeline fields from `record`.
///
/// Absent columns count as empty. No partial entries are produced.
pub fn normalize(record: &RawRecord, columns: &ColumnMap) -> Result<NormalizedEntry, Rejection> {
    let key = normalize_key(record.get(&columns.key).unwrap_or_default());
    if key.is_empty() {
        return Err(Rejection::MissingKey);
    }

    let name = record.get(&columns.name).unwrap_or_default().trim();
    if name.is_empty() {
        return Err(Rejection::MissingName);
    }

    let category = record.get(&columns.category).unwrap_or_default().trim();
    if category.is_empty() {
        return Err(Rejection::MissingCategory);
    }

    Ok(NormalizedEntry {
        key,
        name: name.to_string(),
        category: category.to_string(),
    })
}

/// Canonical color key: trimmed, one leading `#` removed, lowercased.
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .to_lowercase()
}
