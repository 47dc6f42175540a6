//! Parallel tokenization over a fixed-size worker pool.
//!
//! One chunk at a time: the chunk splits into sub-batches, every sub-batch
//! runs the segmenter on a pool worker, and the coordinator blocks until
//! all of them return. Order across sub-batches is not preserved nor
//! needed, since the aggregation downstream is order-independent. A worker
//! panic aborts the whole run: exact counts cannot tolerate a silently
//! dropped sub-batch.
use rayon::prelude::*;

use crate::error::Error;
use crate::tokenize::engine::{EngineHandle, SegmentationEngine};
use crate::tokenize::segmenter::Segmenter;

/// Sub-batches per worker and chunk, to even out scheduling.
pub const DEFAULT_FAN_OUT: usize = 25;

/// Per-worker state: the lazily constructed, memoized segmentation engine.
/// Scoped to the worker's lifetime, never shared across workers.
#[derive(Default)]
pub struct WorkerContext {
    engine: Option<Box<dyn SegmentationEngine>>,
}

impl WorkerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn engine(&mut self, handle: &EngineHandle) -> &dyn SegmentationEngine {
        &**self.engine.get_or_insert_with(|| handle.create())
    }
}

pub struct Dispatcher {
    pool: rayon::ThreadPool,
    workers: usize,
    fan_out: usize,
}

impl Dispatcher {
    pub fn new(workers: usize, fan_out: usize) -> Result<Self, Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;
        Ok(Self {
            pool,
            workers,
            fan_out,
        })
    }

    /// Tokenize one chunk, returning the per-line token sequences of all
    /// sub-batches.
    pub fn dispatch(&self, lines: &[String], segmenter: &Segmenter) -> Vec<Vec<String>> {
        if lines.is_empty() {
            return Vec::new();
        }

        let sub_batch = (lines.len() / (self.workers * self.fan_out)).max(1);
        let batches: Vec<Vec<Vec<String>>> = self.pool.install(|| {
            lines
                .par_chunks(sub_batch)
                .map_init(WorkerContext::new, |ctx, batch| {
                    segmenter.segment_batch(batch, ctx)
                })
                .collect()
        });

        batches.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LangProfile;
    use crate::tokenize::engine::EngineRegistry;
    use crate::tokenize::rule::RuleSegmenter;
    use crate::tokenize::segmenter::CorpusFormat;

    fn rule_segmenter() -> Segmenter {
        Segmenter::Rule(RuleSegmenter::new(&LangProfile::resolve("en").unwrap()).unwrap())
    }

    #[test]
    fn dispatch_matches_sequential_segmentation() {
        let lines: Vec<String> = (0..200)
            .map(|i| format!("Sentence number {} right here!", i))
            .collect();

        let segmenter = rule_segmenter();
        let dispatcher = Dispatcher::new(4, 2).unwrap();
        let parallel = dispatcher.dispatch(&lines, &segmenter);

        let mut ctx = WorkerContext::new();
        let sequential = segmenter.segment_batch(&lines, &mut ctx);

        // aggregation only cares about the token multiset
        let mut parallel: Vec<String> = parallel.into_iter().flatten().collect();
        let mut sequential: Vec<String> = sequential.into_iter().flatten().collect();
        parallel.sort();
        sequential.sort();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn dispatch_empty_chunk() {
        let dispatcher = Dispatcher::new(2, 2).unwrap();
        assert!(dispatcher.dispatch(&[], &rule_segmenter()).is_empty());
    }

    #[test]
    fn dispatch_with_linguistic_engine() {
        let registry = EngineRegistry::builtin();
        let profile = LangProfile::resolve("ja").unwrap();
        let segmenter =
            Segmenter::for_lang(&profile, CorpusFormat::PlainText, false, &registry).unwrap();

        let lines: Vec<String> = vec!["こんにちは。".to_string(); 50];
        let dispatcher = Dispatcher::new(2, 3).unwrap();
        let tokens: Vec<String> = dispatcher
            .dispatch(&lines, &segmenter)
            .into_iter()
            .flatten()
            .collect();
        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| !t.contains('。')));
    }
}
