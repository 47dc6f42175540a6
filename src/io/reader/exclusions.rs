//! Per-language exclusion lists.
//!
//! Known-bad entries (OCR artifacts, uploader signatures) are listed in a
//! CSV whose header row holds langcodes; each column lists sentences to
//! always drop from that language's ranked table.
use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Load the exclusion set for one language. A missing column means no
/// exclusions for that language; a missing file is an error.
pub fn load(src: &Path, lang: &str) -> Result<HashSet<String>, Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(src)?;

    let column = reader
        .headers()?
        .iter()
        .position(|header| header == lang);

    let column = match column {
        Some(idx) => idx,
        None => {
            debug!("[{}] no extra sentences to exclude", lang);
            return Ok(HashSet::new());
        }
    };

    let mut exclusions = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(field) = record.get(column) {
            if !field.is_empty() {
                exclusions.insert(field.to_string());
            }
        }
    }

    debug!("[{}] {} sentences to exclude", lang, exclusions.len());
    Ok(exclusions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclude.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_language_column() {
        let (_dir, path) = fixture("en,fr\nSubtitles by XYZ,Sous-titres XYZ\nwww.ads.example,\n");
        let en = load(&path, "en").unwrap();
        assert!(en.contains("Subtitles by XYZ"));
        assert!(en.contains("www.ads.example"));
        assert_eq!(en.len(), 2);

        // ragged short rows leave the other column alone
        let fr = load(&path, "fr").unwrap();
        assert_eq!(fr.len(), 1);
    }

    #[test]
    fn missing_column_is_empty() {
        let (_dir, path) = fixture("en\nfoo\n");
        assert!(load(&path, "de").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_error() {
        assert!(load(Path::new("nope.csv"), "en").is_err());
    }
}
