//! Running exact count mapping for one corpus pass.
use std::collections::HashMap;

use log::debug;

use crate::counting::rank::sort_ranked;
use crate::filtering::Filter;

/// Surface form -> exact occurrence count.
///
/// Merges are additive only: the count of a key equals the number of corpus
/// occurrences that normalized to that key, whatever the chunking was.
/// Pruning must not run before the last chunk has been merged, since a key
/// below the floor now may still cross it in unseen chunks.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch of keys, one occurrence each.
    pub fn update<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        for key in keys {
            *self.counts.entry(key).or_insert(0) += 1;
        }
    }

    /// Drop the empty key, if present.
    pub fn remove_empty(&mut self) {
        self.counts.remove("");
    }

    /// Keep only the keys a [Filter] detects.
    pub fn retain_detected<F>(&mut self, filter: &F)
    where
        F: for<'a> Filter<&'a str>,
    {
        let before = self.counts.len();
        self.counts.retain(|key, _| filter.detect(key));
        debug!("noise filtering: {} -> {} keys", before, self.counts.len());
    }

    /// Remove keys whose final count is below `floor`. A memory-saving step
    /// only: it runs after full summation and cannot change which keys
    /// survive above the floor. Floors of 0 and 1 disable it.
    pub fn prune_below(&mut self, floor: u64) {
        if floor <= 1 {
            return;
        }
        let before = self.counts.len();
        self.counts.retain(|_, count| *count >= floor);
        debug!(
            "count floor {}: {} -> {} keys",
            floor,
            before,
            self.counts.len()
        );
    }

    /// Sum of all counts currently in the table.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Consume the table into entries ranked by descending count.
    pub fn into_ranked(self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self.counts.into_iter().collect();
        sort_ranked(&mut entries);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn update_accumulates() {
        let mut t = FrequencyTable::new();
        t.update(batch(&["a", "b", "a"]));
        t.update(batch(&["a"]));
        assert_eq!(t.get("a"), Some(3));
        assert_eq!(t.get("b"), Some(1));
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn chunking_does_not_change_counts() {
        let keys = batch(&["x", "y", "x", "z", "x", "y"]);

        let mut one_chunk = FrequencyTable::new();
        one_chunk.update(keys.clone());

        let mut per_line = FrequencyTable::new();
        for key in keys {
            per_line.update(std::iter::once(key));
        }

        assert_eq!(one_chunk.into_ranked(), per_line.into_ranked());
    }

    #[test]
    fn prune_floor() {
        let mut t = FrequencyTable::new();
        t.update(batch(&["a", "a", "a", "b", "b", "c"]));
        t.prune_below(2);
        assert_eq!(t.get("a"), Some(3));
        assert_eq!(t.get("b"), Some(2));
        assert_eq!(t.get("c"), None);

        // floor 0/1 are no-ops
        let mut t = FrequencyTable::new();
        t.update(batch(&["a"]));
        t.prune_below(0);
        t.prune_below(1);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn empty_key_removal() {
        let mut t = FrequencyTable::new();
        t.update(batch(&["", "a", ""]));
        t.remove_empty();
        assert_eq!(t.len(), 1);
        assert_eq!(t.total(), 1);
    }

    #[test]
    fn ranked_is_deterministic() {
        let mut t = FrequencyTable::new();
        t.update(batch(&["b", "a", "c", "c"]));
        assert_eq!(
            t.into_ranked(),
            vec![
                ("c".to_string(), 2),
                ("a".to_string(), 1),
                ("b".to_string(), 1)
            ]
        );
    }
}
