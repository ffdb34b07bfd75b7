//! Synchronous record-to-group pipeline.

use std::borrow::Borrow;

use paint_core::{ColumnMap, PaintGroup, RawRecord};
use paint_ingest::{normalize, Grouper, Rejection};
use serde::Serialize;

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Records decoded from the source.
    pub rows: usize,
    /// Records that normalized successfully.
    pub kept: usize,
    /// Rejected for a missing or empty color key.
    pub missing_key: usize,
    /// Rejected for a blank name.
    pub missing_name: usize,
    /// Rejected for a blank category.
    pub missing_category: usize,
    /// Distinct color keys in the output.
    pub groups: usize,
}

impl PipelineStats {
    /// Total rejected records.
    pub fn rejected(&self) -> usize {
        self.missing_key + self.missing_name + self.missing_category
    }
}

/// Normalize and group `records`, in source order.
pub fn build_groups<I>(records: I, columns: &ColumnMap) -> (Vec<PaintGroup>, PipelineStats)
where
    I: IntoIterator,
    I::Item: Borrow<RawRecord>,
{
    let mut stats = PipelineStats::default();
    let mut grouper = Grouper::new();

    for record in records {
        stats.rows += 1;
        match normalize(record.borrow(), columns) {
            Ok(entry) => {
                stats.kept += 1;
                grouper.push(entry);
            }
            Err(Rejection::MissingKey) => stats.missing_key += 1,
            Err(Rejection::MissingName) => stats.missing_name += 1,
            Err(Rejection::MissingCategory) => stats.missing_category += 1,
        }
    }

    stats.groups = grouper.len();
    (grouper.finish(), stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hex: &str, name: &str, range: &str) -> RawRecord {
        vec![("hex", hex), ("name", name), ("range", range)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_build_groups_counts() {
        let records = vec![
            record("#ABC123", "Red X", "Set A"),
            record("abc123", "Red Y", "Set B"),
            record("", "Ignore", "Set C"),
            record("def", "", "Set C"),
            record("def", "Blue", " "),
            record("#DEF", "Blue", "Set A"),
        ];

        let (groups, stats) = build_groups(&records, &ColumnMap::default());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "abc123");
        assert_eq!(groups[0].equivalents.len(), 2);
        assert_eq!(groups[1].key, "def");
        assert_eq!(
            stats,
            PipelineStats {
                rows: 6,
                kept: 3,
                missing_key: 1,
                missing_name: 1,
                missing_category: 1,
                groups: 2,
            }
        );
        assert_eq!(stats.rejected(), 3);
    }

    #[test]
    fn test_rejected_rows_never_create_groups() {
        let (groups, stats) = build_groups(vec![record("#", "Red", "A")], &ColumnMap::default());
        assert!(groups.is_empty());
        assert_eq!(stats.groups, 0);
    }
}
