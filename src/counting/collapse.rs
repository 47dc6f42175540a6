/*! Near-duplicate variant collapsing

Both collapsers share one shape: partition ranked entries into groups by a
derived key, sum counts inside each group, keep exactly one canonical
surface form per group. No volume is ever dropped: the sum over collapsed
counts equals the sum over input counts.

Entries must arrive ranked (see [crate::counting::sort_ranked]) so that the
first member seen in a group is its highest-count one, with the fixed
lexicographic tie order.
!*/
use std::collections::{hash_map::Entry, HashMap};

use crate::counting::rank::sort_ranked;

/// Sentence-final characters ignored when comparing sentences.
/// "Hello." and "Hello!" transcribe the same spoken sentence.
const SENTENCE_FINAL: &[char] = &[' ', '.', '?', '!', '¿', '¡'];

/// Merges sentences differing only in leading/trailing sentence-final
/// punctuation. The canonical form is the dominant punctuation variant.
#[derive(Debug, Default)]
pub struct SentenceCollapser;

impl SentenceCollapser {
    pub fn collapse(&self, ranked: Vec<(String, u64)>) -> Vec<(String, u64)> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(ranked.len());
        let mut groups: Vec<(String, u64)> = Vec::new();

        for (surface, count) in ranked {
            let key = surface.trim_matches(SENTENCE_FINAL).to_string();
            match index.entry(key) {
                Entry::Occupied(e) => groups[*e.get()].1 += count,
                Entry::Vacant(e) => {
                    e.insert(groups.len());
                    groups.push((surface, count));
                }
            }
        }

        sort_ranked(&mut groups);
        groups
    }
}

/// Merges words differing only in letter case.
///
/// With a cutoff of 0.5 the dominant casing wins. Below 0.5, the lowercase
/// variant wins as soon as its share of the group exceeds the cutoff: very
/// common words picked up capitalized at sentence starts should still rank
/// as lowercase, while proper nouns keep their dominant casing.
#[derive(Debug)]
pub struct CaseCollapser {
    cutoff: f64,
}

struct CaseGroup {
    top: String,
    sum: u64,
    lowercase: u64,
}

impl CaseCollapser {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    pub fn collapse(&self, ranked: Vec<(String, u64)>) -> Vec<(String, u64)> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(ranked.len());
        let mut groups: Vec<CaseGroup> = Vec::new();

        for (surface, count) in ranked {
            let key = surface.to_lowercase();
            let is_lowercase = surface == key;
            match index.entry(key) {
                Entry::Occupied(e) => {
                    let group = &mut groups[*e.get()];
                    group.sum += count;
                    if is_lowercase {
                        group.lowercase += count;
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(groups.len());
                    groups.push(CaseGroup {
                        top: surface,
                        sum: count,
                        lowercase: if is_lowercase { count } else { 0 },
                    });
                }
            }
        }

        let mut collapsed: Vec<(String, u64)> = groups
            .into_iter()
            .map(|group| {
                let share = group.lowercase as f64 / group.sum as f64;
                let canonical = if self.cutoff < 0.5 && group.lowercase > 0 && share > self.cutoff {
                    group.top.to_lowercase()
                } else {
                    group.top
                };
                (canonical, group.sum)
            })
            .collect();

        sort_ranked(&mut collapsed);
        collapsed
    }
}
