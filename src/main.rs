//! # subfreq
//!
//! subfreq extracts ranked frequency tables of the most common sentences
//! and words per language from very large subtitle corpora, with exact
//! counts and bounded memory.
//!
//! ## Getting started
//!
//! ```sh
//! subfreq 0.2.0
//! frequency table extraction tool.
//!
//! USAGE:
//!     subfreq <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Extract top sentence/word tables
//!     summary     Build the cross-language summary table
//! ```
use log::debug;
use structopt::StructOpt;

use subfreq::cli;
use subfreq::error::Error;
use subfreq::io::writer::summary;
use subfreq::pipelines::{Pipeline, RunOpts, TopFreq};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Subfreq::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Subfreq::Pipeline(p) => {
            let mut opts = RunOpts::new(p.src, p.dst);
            opts.format = p.format;
            opts.chunk_size = p.chunk_size;
            opts.workers = p.workers;
            opts.min_count = p.min_count;
            opts.case_cutoff = p.case_cutoff;
            opts.top_sentences = p.top_sentences;
            opts.top_words = p.top_words;
            opts.fast_segmenter = p.fast_segmenter;
            opts.exclusions = p.exclusions;
            opts.sentences = !p.no_sentences;
            opts.words = !p.no_words;

            let pipeline = TopFreq::new(p.langs, opts);
            pipeline.run()?;
        }
        cli::Subfreq::Summary(s) => {
            summary::write_summary(&s.dst, s.csv)?;
        }
    };
    Ok(())
}
