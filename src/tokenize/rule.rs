//! Regex word segmenter.
//!
//! Splits on runs of non-word characters, keeping hyphens, apostrophes,
//! periods (abbreviations) and the Arabic diacritic ranges inside tokens,
//! then trims stray punctuation off token edges. Light per-language
//! normalization: apostrophe glyph folding and trailing possessive
//! stripping, driven by the [LangProfile].
use regex::Regex;

use crate::error::Error;
use crate::lang::LangProfile;

/// Characters split on: anything not a word character and not in the
/// retained set (`-`, `_`, `'`, `’`, `.`, Arabic diacritics).
const SPLIT_PATTERN: &str = r"[^\w\-_'’\.\x{0610}-\x{061A}\x{064B}-\x{065F}]+";

/// Trimmed off both token edges after splitting.
const TOKEN_TRIM: &[char] = &[
    '.', ',', '\'', '’', '"', ' ', '\t', '\n', '\r', '!', '@', '#', '$', '%', '^', '&', '*', '(',
    ')', '_', '-', '=', '+', '{', '}', ':', '<', '>', '?', '/', ';',
];

pub struct RuleSegmenter {
    split: Regex,
    apostrophe_norm: bool,
    possessive_strip: bool,
}

impl RuleSegmenter {
    pub fn new(profile: &LangProfile) -> Result<Self, Error> {
        Ok(Self {
            split: Regex::new(SPLIT_PATTERN)?,
            apostrophe_norm: profile.apostrophe_norm(),
            possessive_strip: profile.possessive_strip(),
        })
    }

    pub fn segment(&self, line: &str) -> Vec<String> {
        // periods stay in the token class for abbreviations ("i.e.");
        // detach the sentence-final ones before splitting
        let line = format!("{} ", line).replace(". ", " ");
        self.split
            .split(&line)
            .filter_map(|raw| self.clean(raw))
            .collect()
    }

    fn clean(&self, raw: &str) -> Option<String> {
        let token = raw.trim_matches(TOKEN_TRIM);
        if token.is_empty() {
            return None;
        }

        let mut token = token.to_string();
        if self.apostrophe_norm {
            token = token.replace(['’', '`'], "'");
        }
        if self.possessive_strip && token.chars().count() > 2 && token.ends_with("'s") {
            token.truncate(token.len() - 2);
        }
        Some(token)
    }
}
