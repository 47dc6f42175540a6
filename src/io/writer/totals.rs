//! Cross-language total occurrence count tables.
//!
//! One CSV per counting mode: header row of langcodes, one data row of
//! totals. Updated read-modify-write so each language run only touches its
//! own column.
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::io::writer::atomic_write;

pub struct TotalsTable {
    path: PathBuf,
}

impl TotalsTable {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all (langcode, total) columns; an absent file is an empty table.
    pub fn read(&self) -> Result<Vec<(String, u64)>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut totals = Vec::new();
        if let Some(record) = reader.records().next() {
            let record = record?;
            for (code, value) in headers.iter().zip(record.iter()) {
                let value = value
                    .parse::<u64>()
                    .map_err(|e| Error::Custom(format!("bad total for {}: {}", code, e)))?;
                totals.push((code.to_string(), value));
            }
        }
        Ok(totals)
    }

    /// Set the total for one language, keeping every other column.
    pub fn upsert(&self, lang: &str, total: u64) -> Result<(), Error> {
        let mut totals = self.read()?;
        match totals.iter_mut().find(|(code, _)| code == lang) {
            Some(entry) => entry.1 = total,
            None => totals.push((lang.to_string(), total)),
        }
        self.write(&totals)
    }

    fn write(&self, totals: &[(String, u64)]) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(totals.iter().map(|(code, _)| code.as_str()))?;
        wtr.write_record(totals.iter().map(|(_, total)| total.to_string()))?;

        let bytes = wtr
            .into_inner()
            .map_err(|e| Error::Custom(e.to_string()))?;
        atomic_write(&self.path, &bytes)
    }
}
