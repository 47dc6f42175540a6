//! Cross-language summary table.
//!
//! Joins the sentence and word total-count tables into one table with a row
//! per language, written as Markdown (with links to the per-language ranked
//! tables) or as CSV.
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::io::writer::{
    atomic_write, TotalsTable, TOTAL_SENTENCES_FILE, TOTAL_WORDS_FILE,
};
use crate::lang::LANG_NAMES;

/// Write `summary_table.md` (or `.csv`) under `dst` and return its path.
pub fn write_summary(dst: &Path, csv_format: bool) -> Result<PathBuf, Error> {
    let sentences = TotalsTable::new(dst.join(TOTAL_SENTENCES_FILE)).read()?;
    let words = TotalsTable::new(dst.join(TOTAL_WORDS_FILE)).read()?;

    // languages in sentence-table order, then word-only stragglers
    let mut codes: Vec<String> = sentences.iter().map(|(code, _)| code.clone()).collect();
    for (code, _) in &words {
        if !codes.contains(code) {
            codes.push(code.clone());
        }
    }

    let out = if csv_format {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(["code", "language", "sentences", "words"])?;
        for code in &codes {
            let sentence_total =
                lookup(&sentences, code).map_or_else(String::new, |t| t.to_string());
            let word_total = lookup(&words, code).map_or_else(String::new, |t| t.to_string());
            wtr.write_record([
                code.as_str(),
                LANG_NAMES.get(code.as_str()).copied().unwrap_or(code.as_str()),
                sentence_total.as_str(),
                word_total.as_str(),
            ])?;
        }
        wtr.into_inner().map_err(|e| Error::Custom(e.to_string()))?
    } else {
        let mut md = String::new();
        md.push_str("| code | language | sentences | words |\n");
        md.push_str("|:-----|:---------|----------:|------:|\n");
        for code in &codes {
            let sentence_cell = lookup(&sentences, code).map_or_else(String::new, |t| {
                format!(
                    "[{}](top_sentences/{}_top_sentences.csv)",
                    group_thousands(t),
                    code
                )
            });
            let word_cell = lookup(&words, code).map_or_else(String::new, |t| {
                format!("[{}](top_words/{}_top_words.csv)", group_thousands(t), code)
            });
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} |",
                code,
                LANG_NAMES.get(code.as_str()).copied().unwrap_or(code.as_str()),
                sentence_cell,
                word_cell
            );
        }
        md.into_bytes()
    };

    let path = dst.join(if csv_format {
        "summary_table.csv"
    } else {
        "summary_table.md"
    });
    atomic_write(&path, &out)?;

    info!("wrote summary for {} languages to {:?}", codes.len(), path);
    Ok(path)
}

fn lookup(table: &[(String, u64)], code: &str) -> Option<u64> {
    table
        .iter()
        .find(|(c, _)| c == code)
        .map(|(_, total)| *total)
}

/// 1234567 -> "1,234,567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let chunks: Vec<String> = bytes
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    chunks.iter().join(",")
}
