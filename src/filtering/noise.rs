/*! Degenerate key removal

Noise keys are count-table entries that are not sentences/words of the
language: punctuation/digit-only content, bracket openings and speaker-style
`foo:` lines (sentence tables only), and Latin transliteration noise in
non-Latin-script languages.
 *  !*/

use unic_ucd::GeneralCategory;
use unicode_script::{Script, UnicodeScript};

use super::Filter;
use crate::lang::LangProfile;

/// Characters that open a bracketed (non-spoken) line.
const BRACKET_OPEN: &[char] = &['(', '[', '{'];

pub struct NoiseFilter {
    sentence_rules: bool,
    latin_is_noise: bool,
}

impl NoiseFilter {
    /// Rules for sentence tables: everything below, plus bracket-start and
    /// colon-end removal.
    pub fn sentences(profile: &LangProfile) -> Self {
        Self {
            sentence_rules: true,
            latin_is_noise: !profile.latin_script(),
        }
    }

    /// Rules for word tables: letterless keys, and Latin noise for
    /// non-Latin-script languages.
    pub fn words(profile: &LangProfile) -> Self {
        Self {
            sentence_rules: false,
            latin_is_noise: !profile.latin_script(),
        }
    }

    fn has_letter(key: &str) -> bool {
        key.chars().any(|c| GeneralCategory::of(c).is_letter())
    }

    fn has_latin(key: &str) -> bool {
        key.chars()
            .any(|c| GeneralCategory::of(c).is_letter() && c.script() == Script::Latin)
    }
}

impl Filter<&str> for NoiseFilter {
    fn detect(&self, key: &str) -> bool {
        if !Self::has_letter(key) {
            return false;
        }

        if self.sentence_rules && (key.starts_with(BRACKET_OPEN) || key.ends_with(':')) {
            return false;
        }

        if self.latin_is_noise && Self::has_latin(key) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> NoiseFilter {
        NoiseFilter::sentences(&LangProfile::resolve("en").unwrap())
    }

    fn non_latin() -> NoiseFilter {
        NoiseFilter::sentences(&LangProfile::resolve("ru").unwrap())
    }

    #[test]
    fn keeps_text() {
        let f = latin();
        assert!(f.detect("Hello there"));
        assert!(f.detect("a1b2"));
    }

    #[test]
    fn removes_letterless() {
        let f = latin();
        assert!(!f.detect("1234"));
        assert!(!f.detect("?!..."));
        assert!(!f.detect("_ _"));
        assert!(!f.detect("42 - 17"));
    }

    #[test]
    fn removes_bracket_start_and_colon_end() {
        let f = latin();
        assert!(!f.detect("(laughs)"));
        assert!(!f.detect("[music]"));
        assert!(!f.detect("{y:i}Hello"));
        assert!(!f.detect("JOHN:"));
        assert!(f.detect("Well, yes"));
    }

    #[test]
    fn word_mode_skips_sentence_rules() {
        let f = NoiseFilter::words(&LangProfile::resolve("en").unwrap());
        assert!(f.detect("(laughs)"));
        assert!(!f.detect("1234"));
    }

    #[test]
    fn latin_noise_in_non_latin_script() {
        let f = non_latin();
        assert!(f.detect("привет"));
        // any Latin letter taints the key, whatever its count was
        assert!(!f.detect("привет ok"));
        assert!(!f.detect("ok"));
        assert!(!f.detect("café"));
    }

    #[test]
    fn digits_alone_removed_in_any_script() {
        let f = non_latin();
        assert!(!f.detect("1991"));
    }
}
