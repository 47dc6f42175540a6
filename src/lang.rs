//! Language metadata.
//!
//! This module holds the supported language set and the per-language
//! profiles (display name, script family, segmenter capabilities) that the
//! pipeline resolves once at startup.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {

    /// Languages available in the subtitle corpus.
    /// `ze_*` codes denote files carrying dual Chinese/English subtitles.
    pub static ref LANG: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("af");
        m.insert("ar");
        m.insert("bg");
        m.insert("bn");
        m.insert("br");
        m.insert("bs");
        m.insert("ca");
        m.insert("cs");
        m.insert("da");
        m.insert("de");
        m.insert("el");
        m.insert("en");
        m.insert("eo");
        m.insert("es");
        m.insert("et");
        m.insert("eu");
        m.insert("fa");
        m.insert("fi");
        m.insert("fr");
        m.insert("gl");
        m.insert("he");
        m.insert("hi");
        m.insert("hr");
        m.insert("hu");
        m.insert("hy");
        m.insert("id");
        m.insert("is");
        m.insert("it");
        m.insert("ja");
        m.insert("ka");
        m.insert("kk");
        m.insert("ko");
        m.insert("lt");
        m.insert("lv");
        m.insert("mk");
        m.insert("ml");
        m.insert("ms");
        m.insert("nl");
        m.insert("no");
        m.insert("pl");
        m.insert("pt");
        m.insert("pt_br");
        m.insert("ro");
        m.insert("ru");
        m.insert("si");
        m.insert("sk");
        m.insert("sl");
        m.insert("sq");
        m.insert("sr");
        m.insert("sv");
        m.insert("ta");
        m.insert("te");
        m.insert("th");
        m.insert("tl");
        m.insert("tr");
        m.insert("uk");
        m.insert("ur");
        m.insert("vi");
        m.insert("ze_en");
        m.insert("ze_zh");
        m.insert("zh_cn");
        m.insert("zh_tw");

        m
    };

    /// English display names, used by the summary table.
    pub static ref LANG_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("af", "Afrikaans");
        m.insert("ar", "Arabic");
        m.insert("bg", "Bulgarian");
        m.insert("bn", "Bengali");
        m.insert("br", "Breton");
        m.insert("bs", "Bosnian");
        m.insert("ca", "Catalan");
        m.insert("cs", "Czech");
        m.insert("da", "Danish");
        m.insert("de", "German");
        m.insert("el", "Greek");
        m.insert("en", "English");
        m.insert("eo", "Esperanto");
        m.insert("es", "Spanish");
        m.insert("et", "Estonian");
        m.insert("eu", "Basque");
        m.insert("fa", "Persian");
        m.insert("fi", "Finnish");
        m.insert("fr", "French");
        m.insert("gl", "Galician");
        m.insert("he", "Hebrew");
        m.insert("hi", "Hindi");
        m.insert("hr", "Croatian");
        m.insert("hu", "Hungarian");
        m.insert("hy", "Armenian");
        m.insert("id", "Indonesian");
        m.insert("is", "Icelandic");
        m.insert("it", "Italian");
        m.insert("ja", "Japanese");
        m.insert("ka", "Georgian");
        m.insert("kk", "Kazakh");
        m.insert("ko", "Korean");
        m.insert("lt", "Lithuanian");
        m.insert("lv", "Latvian");
        m.insert("mk", "Macedonian");
        m.insert("ml", "Malayalam");
        m.insert("ms", "Malay");
        m.insert("nl", "Dutch");
        m.insert("no", "Norwegian");
        m.insert("pl", "Polish");
        m.insert("pt", "Portuguese");
        m.insert("pt_br", "Portuguese, Brazil");
        m.insert("ro", "Romanian");
        m.insert("ru", "Russian");
        m.insert("si", "Sinhala");
        m.insert("sk", "Slovak");
        m.insert("sl", "Slovenian");
        m.insert("sq", "Albanian");
        m.insert("sr", "Serbian");
        m.insert("sv", "Swedish");
        m.insert("ta", "Tamil");
        m.insert("te", "Telugu");
        m.insert("th", "Thai");
        m.insert("tl", "Tagalog");
        m.insert("tr", "Turkish");
        m.insert("uk", "Ukrainian");
        m.insert("ur", "Urdu");
        m.insert("vi", "Vietnamese");
        m.insert("ze_en", "English, ze");
        m.insert("ze_zh", "Chinese, ze");
        m.insert("zh_cn", "Chinese");
        m.insert("zh_tw", "Chinese, Taiwan");

        m
    };

    /// Languages whose native script is not Latin.
    /// Latin characters in their tables are transliteration noise.
    pub static ref NON_LATIN: HashSet<&'static str> = [
        "ar", "bg", "bn", "el", "fa", "he", "hi", "hy", "ja", "ka", "kk",
        "ko", "mk", "ml", "ru", "si", "ta", "te", "th", "uk", "ur", "ze_zh",
        "zh_cn", "zh_tw",
    ]
    .iter()
    .copied()
    .collect();

    /// Normalized codes without a linguistic segmentation model.
    /// These always fall back to the rule segmenter.
    // TODO: ko has a model upstream but its tag converter is broken, keep it here until fixed.
    pub static ref NO_MODEL: HashSet<&'static str> =
        ["br", "bs", "eo", "gl", "ka", "kk", "ms", "no", "ko"]
            .iter()
            .copied()
            .collect();

    /// Normalized codes without reliable whitespace word boundaries.
    /// These use the linguistic engine even when the fast segmenter is requested.
    pub static ref LOGOGRAPHIC: HashSet<&'static str> =
        ["zh", "ja", "th", "lo", "km"].iter().copied().collect();
}

/// Per-language configuration, resolved once at startup.
///
/// Centralizes what would otherwise be string-keyed conditionals spread
/// across the tokenizer and the noise filter.
#[derive(Debug, Clone)]
pub struct LangProfile {
    code: &'static str,
    normalized: &'static str,
    name: &'static str,
}

impl LangProfile {
    /// Validate a langcode against [struct@LANG] and build its profile.
    pub fn resolve(code: &str) -> Result<Self, Error> {
        let code = *LANG
            .get(code)
            .ok_or_else(|| Error::UnknownLang(code.to_string()))?;

        Ok(Self {
            code,
            normalized: Self::normalize(code),
            name: LANG_NAMES.get(code).copied().unwrap_or(code),
        })
    }

    /// `ze_*` codes resolve to the language after the underscore,
    /// regional variants (`pt_br`, `zh_cn`) to the one before.
    fn normalize(code: &'static str) -> &'static str {
        if let Some(rest) = code.strip_prefix("ze_") {
            rest
        } else if let Some(idx) = code.find('_') {
            &code[..idx]
        } else {
            code
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn normalized(&self) -> &'static str {
        self.normalized
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn latin_script(&self) -> bool {
        !NON_LATIN.contains(self.code)
    }

    pub fn logographic(&self) -> bool {
        LOGOGRAPHIC.contains(self.normalized)
    }

    pub fn has_model(&self) -> bool {
        !NO_MODEL.contains(self.normalized)
    }

    /// Alternate apostrophe glyphs are folded to `'` for these languages.
    pub fn apostrophe_norm(&self) -> bool {
        matches!(self.normalized, "en" | "fr" | "it" | "de" | "es" | "el")
    }

    /// Trailing `'s` possessives are stripped from tokens for these languages.
    pub fn possessive_strip(&self) -> bool {
        matches!(self.normalized, "en" | "nl" | "af")
    }
}
