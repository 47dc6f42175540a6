/*! Writing facilities

Ranked tables, the cross-language total-count tables and the summary table.

Every artifact goes through an atomic write: content lands in a temporary
file in the destination directory and is renamed into place only once
complete, so an aborted run never leaves a truncated table behind.
!*/
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Error;

pub mod ranked;
pub mod summary;
pub mod totals;

pub use ranked::{RankedWriter, TableKind};
pub use totals::TotalsTable;

pub const TOTAL_SENTENCES_FILE: &str = "total_counts_sentences.csv";
pub const TOTAL_WORDS_FILE: &str = "total_counts_words.csv";

pub fn sentence_outfile(dst: &Path, lang: &str) -> PathBuf {
    dst.join("top_sentences")
        .join(format!("{}_top_sentences.csv", lang))
}

pub fn word_outfile(dst: &Path, lang: &str) -> PathBuf {
    dst.join("top_words").join(format!("{}_top_words.csv", lang))
}

pub(crate) fn atomic_write(dst: &Path, bytes: &[u8]) -> Result<(), Error> {
    let parent = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(dst).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
