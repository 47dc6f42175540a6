/*! Exact frequency counting

One [frequency::FrequencyTable] lives for the duration of a corpus pass and
is mutated by the coordinator only. Collapsing and ranking run on the ranked
entry list once the pass is over.
!*/
mod collapse;
mod frequency;
mod rank;

pub use collapse::{CaseCollapser, SentenceCollapser};
pub use frequency::FrequencyTable;
pub use rank::{rank, sort_ranked};
