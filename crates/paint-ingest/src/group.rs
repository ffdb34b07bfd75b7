//! Grouping normalized entries by color key.

use std::collections::HashMap;

use paint_core::{NormalizedEntry, PaintGroup};

/// Incremental, order-preserving grouper.
///
/// Groups appear in the order their key was first seen; equivalents keep
/// input order and are never deduplicated.
#[derive(Debug, Default)]
pub struct Grouper {
    groups: Vec<PaintGroup>,
    index: HashMap<String, usize>,
}

impl Grouper {
    /// Create an empty grouper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry to its key's group, creating the group if needed.
    pub fn push(&mut self, entry: NormalizedEntry) {
        let NormalizedEntry {
            key,
            name,
            category,
        } = entry;

        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(key.clone(), slot);
                self.groups.push(PaintGroup::new(key));
                slot
            }
        };

        self.groups[slot].push(name, category);
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if nothing has been grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the grouper, returning groups in first-seen order.
    pub fn finish(self) -> Vec<PaintGroup> {
        self.groups
    }
}

impl Extend<NormalizedEntry> for Grouper {
    fn extend<I: IntoIterator<Item = NormalizedEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

/// Group a sequence of entries in one call.
pub fn group_entries<I>(entries: I) -> Vec<PaintGroup>
where
    I: IntoIterator<Item = NormalizedEntry>,
{
    let mut grouper = Grouper::new();
    grouper.extend(entries);
    grouper.finish()
}

#[cfg(test)]
mod tests {
    use paint_core::Equivalent;

    use super::*;

    fn entry(key: &str, name: &str, category: &str) -> NormalizedEntry {
        NormalizedEntry {
            key: key.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    fn equivalent(name: &str, category: &str) -> Equivalent {
        Equivalent {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let groups = group_entries(vec![
            entry("bbb", "B1", "X"),
            entry("aaa", "A1", "X"),
            entry("bbb", "B2", "Y"),
            entry("ccc", "C1", "Z"),
            entry("aaa", "A2", "Y"),
        ]);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["bbb", "aaa", "ccc"]);
        assert_eq!(groups[0].equivalents, vec![equivalent("B1", "X"), equivalent("B2", "Y")]);
        assert_eq!(groups[1].equivalents, vec![equivalent("A1", "X"), equivalent("A2", "Y")]);
        assert_eq!(groups[2].equivalents, vec![equivalent("C1", "Z")]);
    }

    #[test]
    fn test_duplicates_within_group_kept() {
        let groups = group_entries(vec![entry("abc", "Red", "A"), entry("abc", "Red", "A")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].equivalents.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_entries(Vec::new()).is_empty());
    }

    #[test]
    fn test_incremental_push() {
        let mut grouper = Grouper::new();
        assert!(grouper.is_empty());

        grouper.push(entry("abc", "Red", "A"));
        grouper.push(entry("def", "Blue", "A"));
        grouper.push(entry("abc", "Crimson", "B"));
        assert_eq!(grouper.len(), 2);

        let groups = grouper.finish();
        assert_eq!(groups[0].equivalents.len(), 2);
        assert_eq!(groups[1].key, "def");
    }
}
