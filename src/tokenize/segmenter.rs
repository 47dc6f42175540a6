//! Segmentation strategy selection.
use std::str::FromStr;

use unic_ucd::GeneralCategory;

use crate::error::Error;
use crate::lang::LangProfile;
use crate::tokenize::dispatch::WorkerContext;
use crate::tokenize::engine::{EngineHandle, EngineRegistry};
use crate::tokenize::rule::RuleSegmenter;

/// Linguistic engines are called on joined super-lines of at least this
/// many characters to amortize per-call overhead.
const MIN_SUPER_LINE: usize = 5_000;

/// Upstream corpus variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// Extracted from raw subtitle XML, one sentence per line.
    RawExtracted,
    /// Plain text, one sentence per line.
    PlainText,
    /// Already space-separated tokens.
    PreTokenized,
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::RawExtracted),
            "text" => Ok(Self::PlainText),
            "tokenized" => Ok(Self::PreTokenized),
            other => Err(format!("not a valid corpus format: {}", other)),
        }
    }
}

/// One strategy per (language, format, flags), resolved before the first
/// line is read.
pub enum Segmenter {
    /// Whitespace split only, for pre-tokenized corpora.
    Passthrough,
    Rule(RuleSegmenter),
    Linguistic(LinguisticSegmenter),
}

impl Segmenter {
    /// Selection policy: pre-tokenized corpora pass through; logographic
    /// languages always use the linguistic engine, even with
    /// `fast_segmenter`; languages without a model, or any language when
    /// `fast_segmenter` is set, use the rule segmenter.
    pub fn for_lang(
        profile: &LangProfile,
        format: CorpusFormat,
        fast_segmenter: bool,
        registry: &EngineRegistry,
    ) -> Result<Self, Error> {
        if format == CorpusFormat::PreTokenized {
            return Ok(Self::Passthrough);
        }

        if profile.logographic() {
            let handle = registry.resolve(profile.normalized())?;
            return Ok(Self::Linguistic(LinguisticSegmenter::new(handle)));
        }

        if fast_segmenter || !profile.has_model() {
            return Ok(Self::Rule(RuleSegmenter::new(profile)?));
        }

        let handle = registry.resolve(profile.normalized())?;
        Ok(Self::Linguistic(LinguisticSegmenter::new(handle)))
    }

    /// Segment a sub-batch of lines into per-line (or per-super-line) token
    /// sequences. Sequence boundaries are not significant downstream; only
    /// the multiset of tokens is.
    pub fn segment_batch(&self, lines: &[String], ctx: &mut WorkerContext) -> Vec<Vec<String>> {
        match self {
            Self::Passthrough => lines
                .iter()
                .map(|line| line.split_whitespace().map(str::to_string).collect())
                .collect(),
            Self::Rule(rule) => lines.iter().map(|line| rule.segment(line)).collect(),
            Self::Linguistic(linguistic) => linguistic.segment_joined(lines, ctx),
        }
    }
}

/// Engine-backed segmentation with super-line batching.
pub struct LinguisticSegmenter {
    handle: EngineHandle,
    min_join: usize,
}

impl LinguisticSegmenter {
    pub fn new(handle: EngineHandle) -> Self {
        Self {
            handle,
            min_join: MIN_SUPER_LINE,
        }
    }

    #[cfg(test)]
    fn with_min_join(handle: EngineHandle, min_join: usize) -> Self {
        Self { handle, min_join }
    }

    fn segment_joined(&self, lines: &[String], ctx: &mut WorkerContext) -> Vec<Vec<String>> {
        join_to_min_length(lines, self.min_join)
            .iter()
            .map(|super_line| {
                ctx.engine(&self.handle)
                    .segment(super_line)
                    .into_iter()
                    .map(|token| token.trim_matches('-').to_string())
                    .filter(|token| !is_pure_punctuation(token))
                    .collect()
            })
            .collect()
    }
}

fn is_pure_punctuation(token: &str) -> bool {
    token
        .chars()
        .all(|c| GeneralCategory::of(c).is_punctuation() || c.is_whitespace())
}

/// Greedily join lines into super-lines of at least `min_len` characters;
/// a trailing shorter super-line closes the sequence.
fn join_to_min_length(lines: &[String], min_len: usize) -> Vec<String> {
    let mut joined = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut length = 0usize;

    for line in lines {
        if current.is_empty() {
            length = line.chars().count();
            current.push(line);
        } else {
            let new_length = length + 1 + line.chars().count();
            current.push(line);
            if new_length >= min_len {
                joined.push(current.join(" "));
                current.clear();
                length = 0;
            } else {
                length = new_length;
            }
        }
    }

    if !current.is_empty() {
        joined.push(current.join(" "));
    }
    joined
}
