/*! Top-frequency extraction pipeline

Per language: stream the corpus in bounded chunks, count exactly, then
filter, collapse and rank.

# Processing
1. Chunks of lines are read and normalized (edge stripping), one chunk in
   memory at a time.
1. Sentence pass: every normalized line is one key; chunk counts merge into
   the running table.
1. Word pass: each chunk fans out over the worker pool for tokenization;
   token counts merge into the running table.
1. After the last chunk: empty-key removal, noise filtering, total capture,
   count floor, variant collapsing, exclusion and top-N truncation.
1. Tables are written atomically; the per-language totals update last.

Counting must see the entire corpus before any pruning: a key below the
floor in one chunk may still cross it in a later one.
!*/
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, error, info};

use crate::counting::{rank, CaseCollapser, FrequencyTable, SentenceCollapser};
use crate::error::Error;
use crate::filtering::NoiseFilter;
use crate::io::reader::{chunk, exclusions, ChunkReader};
use crate::io::writer::{
    sentence_outfile, word_outfile, RankedWriter, TableKind, TotalsTable, TOTAL_SENTENCES_FILE,
    TOTAL_WORDS_FILE,
};
use crate::lang::LangProfile;
use crate::pipelines::pipeline::Pipeline;
use crate::tokenize::dispatch::DEFAULT_FAN_OUT;
use crate::tokenize::{CorpusFormat, Dispatcher, EngineRegistry, Segmenter};

/// Characters stripped from both ends of every corpus line before it
/// becomes a counting key (subtitle dashes, slashes, stray quotes).
const LINESTRIP: &[char] = &[' ', '/', '-', '–', '\t', '"'];

/// Everything configurable about one pipeline invocation.
pub struct RunOpts {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub format: CorpusFormat,
    pub chunk_size: usize,
    pub workers: usize,
    pub fan_out: usize,
    pub min_count: u64,
    pub case_cutoff: f64,
    pub top_sentences: usize,
    pub top_words: usize,
    pub fast_segmenter: bool,
    pub exclusions: Option<PathBuf>,
    pub sentences: bool,
    pub words: bool,
}

impl RunOpts {
    /// Defaults tuned for multi-gigabyte corpora on a workstation.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(src: P, dst: Q) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            format: CorpusFormat::PlainText,
            chunk_size: 10_000_000,
            workers: 6,
            fan_out: DEFAULT_FAN_OUT,
            min_count: 5,
            case_cutoff: 0.08,
            top_sentences: 10_000,
            top_words: 30_000,
            fast_segmenter: false,
            exclusions: None,
            sentences: true,
            words: true,
        }
    }
}

pub struct TopFreq {
    langs: Vec<String>,
    opts: RunOpts,
    registry: EngineRegistry,
}

impl TopFreq {
    pub fn new(langs: Vec<String>, opts: RunOpts) -> Self {
        Self {
            langs,
            opts,
            registry: EngineRegistry::builtin(),
        }
    }

    /// Substitute the engine registry (dedicated segmenters, test stubs).
    pub fn with_registry(mut self, registry: EngineRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Locate the corpus file for a language, gzipped or not.
    fn corpus_path(&self, lang: &str) -> Result<PathBuf, Error> {
        let mut names = vec![format!("{}.txt", lang), format!("{}.txt.gz", lang)];
        if self.opts.format == CorpusFormat::PreTokenized {
            names.insert(0, format!("{}.tok.gz", lang));
            names.insert(0, format!("{}.tok", lang));
        }

        for name in &names {
            let candidate = self.opts.src.join(name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no corpus file for {} under {:?}", lang, self.opts.src),
        )))
    }

    fn run_lang(&self, lang: &str) -> Result<(), Error> {
        let profile = LangProfile::resolve(lang)?;

        if self.opts.sentences {
            self.run_sentences(&profile)?;
        }
        if self.opts.words {
            self.run_words(&profile)?;
        }
        Ok(())
    }

    fn run_sentences(&self, profile: &LangProfile) -> Result<(), Error> {
        let lang = profile.code();
        info!("[{}] getting top sentences", lang);

        let src = self.corpus_path(lang)?;
        let nlines = chunk::count_lines(&src)?;
        if nlines == 0 {
            info!("[{}] no lines to process", lang);
            return Ok(());
        }
        info!("[{}] processing {} lines", lang, nlines);

        let start = Instant::now();
        let mut table = FrequencyTable::new();
        let mut lines_done = 0u64;
        for batch in ChunkReader::open(&src, self.opts.chunk_size)? {
            let batch = batch?;
            lines_done += batch.len() as u64;
            table.update(batch.iter().map(|line| normalize_line(line)));
            info!("[{}] {} lines done", lang, lines_done);
        }
        info!(
            "[{}] counted sentences in {:.1}s",
            lang,
            start.elapsed().as_secs_f64()
        );

        let (ranked, total) =
            finalize(table, &NoiseFilter::sentences(profile), self.opts.min_count);
        let collapsed = SentenceCollapser.collapse(ranked);

        let excluded = match &self.opts.exclusions {
            Some(path) => exclusions::load(path, lang)?,
            None => HashSet::new(),
        };
        let top = rank(collapsed, &excluded, self.opts.top_sentences);

        RankedWriter::new(TableKind::Sentences)
            .write(&sentence_outfile(&self.opts.dst, lang), &top)?;
        TotalsTable::new(self.opts.dst.join(TOTAL_SENTENCES_FILE)).upsert(lang, total)?;
        Ok(())
    }

    fn run_words(&self, profile: &LangProfile) -> Result<(), Error> {
        let lang = profile.code();
        info!("[{}] getting top words", lang);

        // segmenter resolution fails fast, before any line is read
        let segmenter = Segmenter::for_lang(
            profile,
            self.opts.format,
            self.opts.fast_segmenter,
            &self.registry,
        )?;
        let dispatcher = Dispatcher::new(self.opts.workers, self.opts.fan_out)?;

        let src = self.corpus_path(lang)?;
        let nlines = chunk::count_lines(&src)?;
        if nlines == 0 {
            info!("[{}] no lines to process", lang);
            return Ok(());
        }
        info!("[{}] processing {} lines", lang, nlines);

        let start = Instant::now();
        let mut table = FrequencyTable::new();
        let mut lines_done = 0u64;
        for batch in ChunkReader::open(&src, self.opts.chunk_size)? {
            let batch = batch?;
            lines_done += batch.len() as u64;

            let lines: Vec<String> = batch.iter().map(|line| normalize_line(line)).collect();
            let token_lines = dispatcher.dispatch(&lines, &segmenter);
            table.update(token_lines.into_iter().flatten());
            info!("[{}] {} lines done", lang, lines_done);
        }
        info!(
            "[{}] tokenized and counted words in {:.1}s",
            lang,
            start.elapsed().as_secs_f64()
        );

        let (ranked, total) = finalize(table, &NoiseFilter::words(profile), self.opts.min_count);
        let collapsed = CaseCollapser::new(self.opts.case_cutoff).collapse(ranked);
        let top = rank(collapsed, &HashSet::new(), self.opts.top_words);

        RankedWriter::new(TableKind::Words).write(&word_outfile(&self.opts.dst, lang), &top)?;
        TotalsTable::new(self.opts.dst.join(TOTAL_WORDS_FILE)).upsert(lang, total)?;
        Ok(())
    }
}

impl Pipeline<()> for TopFreq {
    /// Languages run independently: a failed language is logged and the
    /// remaining ones still run, the pipeline erroring at the end. Worker
    /// panics are not caught and abort the whole process.
    fn run(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.opts.dst)?;

        let mut failures = 0usize;
        for lang in &self.langs {
            let start = Instant::now();
            info!("language: {}", lang);
            if let Err(e) = self.run_lang(lang) {
                error!("[{}] run failed: {:?}", lang, e);
                failures += 1;
            }
            info!(
                "[{}] total time: {:.1}s",
                lang,
                start.elapsed().as_secs_f64()
            );
        }

        if failures > 0 {
            Err(Error::Custom(format!(
                "{}/{} language runs failed",
                failures,
                self.langs.len()
            )))
        } else {
            Ok(())
        }
    }
}

fn normalize_line(line: &str) -> String {
    line.trim_matches(LINESTRIP).to_string()
}

/// Post-pass sequence shared by both modes: empty-key removal, noise
/// filtering, total capture, then the memory floor.
fn finalize(
    mut table: FrequencyTable,
    filter: &NoiseFilter,
    min_count: u64,
) -> (Vec<(String, u64)>, u64) {
    table.remove_empty();
    table.retain_detected(filter);
    let total = table.total();
    table.prune_below(min_count);
    debug!("{} keys above floor, {} occurrences", table.len(), total);
    (table.into_ranked(), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_subtitle_edges() {
        assert_eq!(normalize_line("- Hello there. "), "Hello there.");
        assert_eq!(normalize_line("\"Who, me?\""), "Who, me?");
        assert_eq!(normalize_line("– Oui / "), "Oui");
        assert_eq!(normalize_line("   "), "");
    }

    #[test]
    fn finalize_order_floor_after_total() {
        let mut table = FrequencyTable::new();
        table.update(
            ["Hello", "Hello", "Hi", "", "123"]
                .iter()
                .map(|s| s.to_string()),
        );

        let profile = LangProfile::resolve("en").unwrap();
        let (ranked, total) = finalize(table, &NoiseFilter::sentences(&profile), 2);

        // total counts noise-free keys before the floor removes "Hi"
        assert_eq!(total, 3);
        assert_eq!(ranked, vec![("Hello".to_string(), 2)]);
    }
}
