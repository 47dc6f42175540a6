/*! Tokenization

Per-language text segmentation. A line becomes a sequence of word tokens
through one of three strategies, resolved once at startup:

- [segmenter::Segmenter::Passthrough] for already-tokenized corpora,
- [rule::RuleSegmenter], a regex segmenter with light per-language
  normalization,
- a linguistic engine behind the [engine::SegmentationEngine] capability for
  languages without reliable whitespace word boundaries.

Chunks fan out over a fixed worker pool through [dispatch::Dispatcher].
!*/
pub mod dispatch;
pub mod engine;
pub mod rule;
pub mod segmenter;

pub use dispatch::{Dispatcher, WorkerContext};
pub use engine::{EngineRegistry, SegmentationEngine, UnicodeEngine};
pub use rule::RuleSegmenter;
pub use segmenter::{CorpusFormat, Segmenter};
