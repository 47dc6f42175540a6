//! Ranking and truncation of count entries.
use std::collections::HashSet;

use log::debug;

/// Sort entries by descending count. Equal counts order by surface form so
/// the ranking is reproducible for identical input.
pub fn sort_ranked(entries: &mut [(String, u64)]) {
    entries.sort_unstable_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
}

/// Drop excluded surface forms, then truncate to `top_n`.
///
/// Exclusion runs before truncation: removing a ranked entry promotes the
/// next one instead of shrinking the output below `top_n`.
pub fn rank(
    mut entries: Vec<(String, u64)>,
    exclusions: &HashSet<String>,
    top_n: usize,
) -> Vec<(String, u64)> {
    if !exclusions.is_empty() {
        let before = entries.len();
        entries.retain(|(key, _)| !exclusions.contains(key));
        debug!("excluded {} entries", before - entries.len());
    }
    entries.truncate(top_n);
    entries
}
