//! Ranked (surface form, count) table writer.
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::io::writer::atomic_write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Sentences,
    Words,
}

impl TableKind {
    fn label(&self) -> &'static str {
        match self {
            TableKind::Sentences => "sentence",
            TableKind::Words => "word",
        }
    }
}

#[derive(Serialize)]
struct SentenceRow<'a> {
    sentence: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct WordRow<'a> {
    word: &'a str,
    count: u64,
}

/// Writes a ranked table as CSV with a header row, atomically.
pub struct RankedWriter {
    kind: TableKind,
}

impl RankedWriter {
    pub fn new(kind: TableKind) -> Self {
        Self { kind }
    }

    pub fn write(&self, dst: &Path, entries: &[(String, u64)]) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        if entries.is_empty() {
            wtr.write_record([self.kind.label(), "count"])?;
        }
        for (surface, count) in entries {
            match self.kind {
                TableKind::Sentences => wtr.serialize(SentenceRow {
                    sentence: surface,
                    count: *count,
                })?,
                TableKind::Words => wtr.serialize(WordRow {
                    word: surface,
                    count: *count,
                })?,
            }
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| Error::Custom(e.to_string()))?;
        atomic_write(dst, &bytes)?;

        info!("wrote {} {} rows to {:?}", entries.len(), self.kind.label(), dst);
        Ok(())
    }
}
