//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::tokenize::CorpusFormat;

#[derive(Debug, StructOpt)]
#[structopt(name = "subfreq", about = "frequency table extraction tool.")]
/// Holds every command that is callable by the `subfreq` command.
pub enum Subfreq {
    #[structopt(about = "Extract top sentence/word tables")]
    Pipeline(PipelineCmd),
    #[structopt(about = "Build the cross-language summary table")]
    Summary(SummaryCmd),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// ```sh
/// subfreq pipeline [FLAGS] [OPTIONS] <src> <dst> --lang <langs>...
///
/// ARGS:
///     <src>    source corpus folder (contains <lang>.txt[.gz])
///     <dst>    result destination folder
/// ```
pub struct PipelineCmd {
    #[structopt(parse(from_os_str), help = "source corpus folder (contains <lang>.txt[.gz])")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        required = true,
        help = "langcodes to process"
    )]
    pub langs: Vec<String>,
    #[structopt(
        long = "format",
        default_value = "text",
        help = "corpus format: raw, text or tokenized"
    )]
    pub format: CorpusFormat,
    #[structopt(
        long = "chunk-size",
        default_value = "10000000",
        help = "lines per chunk"
    )]
    pub chunk_size: usize,
    #[structopt(short = "w", long = "workers", default_value = "6")]
    pub workers: usize,
    #[structopt(
        long = "min-count",
        default_value = "5",
        help = "drop entries below this final count (0 disables)"
    )]
    pub min_count: u64,
    #[structopt(
        long = "case-cutoff",
        default_value = "0.08",
        help = "lowercase share above which a word ranks lowercase (0.5: majority casing wins)"
    )]
    pub case_cutoff: f64,
    #[structopt(long = "top-sentences", default_value = "10000")]
    pub top_sentences: usize,
    #[structopt(long = "top-words", default_value = "30000")]
    pub top_words: usize,
    #[structopt(
        long = "fast-segmenter",
        help = "always use the rule segmenter (logographic languages excepted)"
    )]
    pub fast_segmenter: bool,
    #[structopt(
        long = "exclude",
        parse(from_os_str),
        help = "per-language sentence exclusion csv"
    )]
    pub exclusions: Option<PathBuf>,
    #[structopt(long = "no-sentences", help = "skip the sentence tables")]
    pub no_sentences: bool,
    #[structopt(long = "no-words", help = "skip the word tables")]
    pub no_words: bool,
}

#[derive(Debug, StructOpt)]
/// Summary command and parameters.
pub struct SummaryCmd {
    #[structopt(parse(from_os_str), help = "pipeline destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "csv", help = "write csv instead of markdown")]
    pub csv: bool,
}
