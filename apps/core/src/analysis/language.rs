//! Language detection by Unicode script.
//!
//! Campus users write in English plus several Indic scripts. Detection tests
//! the text against a fixed, ordered list of script classes and labels the
//! text by the first script with any matching character. Order is the
//! tie-break: mixed-script text takes the first matching script, not the
//! majority one.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected language label, as consumed by the dashboard frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Gujarati,
    Bengali,
    Malayalam,
    Others,
}

impl Language {
    /// All labels, in report order.
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
        Language::Gujarati,
        Language::Bengali,
        Language::Malayalam,
        Language::Others,
    ];

    /// Returns the display label used in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Kannada => "Kannada",
            Language::Gujarati => "Gujarati",
            Language::Bengali => "Bengali",
            Language::Malayalam => "Malayalam",
            Language::Others => "Others",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Compile script classes once at startup. Check order is fixed and
// significant: Devanagari text wins over Tamil in a mixed-script string.
static SCRIPT_PATTERNS: LazyLock<Vec<(Language, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Language::Hindi,
            Regex::new(r"\p{Devanagari}").expect("Invalid regex: Devanagari script class"),
        ),
        (
            Language::Tamil,
            Regex::new(r"\p{Tamil}").expect("Invalid regex: Tamil script class"),
        ),
        (
            Language::Telugu,
            Regex::new(r"\p{Telugu}").expect("Invalid regex: Telugu script class"),
        ),
        (
            Language::Kannada,
            Regex::new(r"\p{Kannada}").expect("Invalid regex: Kannada script class"),
        ),
        (
            Language::Gujarati,
            Regex::new(r"\p{Gujarati}").expect("Invalid regex: Gujarati script class"),
        ),
        (
            Language::Bengali,
            Regex::new(r"\p{Bengali}").expect("Invalid regex: Bengali script class"),
        ),
        (
            Language::Malayalam,
            Regex::new(r"\p{Malayalam}").expect("Invalid regex: Malayalam script class"),
        ),
    ]
});

static LATIN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("Invalid regex: Latin letter class"));

/// Labels a text by the first matching script, falling back to English for
/// Latin letters and Others for everything else.
pub fn detect_language(text: &str) -> Language {
    for (language, pattern) in SCRIPT_PATTERNS.iter() {
        if pattern.is_match(text) {
            return *language;
        }
    }
    if LATIN_LETTER.is_match(text) {
        return Language::English;
    }
    Language::Others
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_detection_per_language() {
        let samples = vec![
            ("छात्रवृत्ति कब मिलेगी", Language::Hindi),
            ("தேர்வு எப்போது", Language::Tamil),
            ("పరీక్ష ఎప్పుడు", Language::Telugu),
            ("ಪರೀಕ್ಷೆ ಯಾವಾಗ", Language::Kannada),
            ("ફી કેટલી છે", Language::Gujarati),
            ("বৃত্তি কখন পাব", Language::Bengali),
            ("പരീക്ഷ എപ്പോഴാണ്", Language::Malayalam),
        ];

        for (text, expected) in samples {
            assert_eq!(
                detect_language(text),
                expected,
                "Expected {:?} for '{}'",
                expected,
                text
            );
        }
    }

    #[test]
    fn test_latin_text_is_english() {
        assert_eq!(detect_language("When is the exam?"), Language::English);
    }

    #[test]
    fn test_mixed_script_takes_first_in_order() {
        // Devanagari is checked before Tamil, regardless of position or count.
        assert_eq!(detect_language("தேர்வு परीक्षा"), Language::Hindi);
        assert_eq!(detect_language("परीक्षा தேர்வு"), Language::Hindi);
    }

    #[test]
    fn test_script_beats_latin() {
        assert_eq!(detect_language("exam தேர்வு details"), Language::Tamil);
    }

    #[test]
    fn test_no_letters_is_others() {
        assert_eq!(detect_language("1234 ?!"), Language::Others);
        assert_eq!(detect_language("…"), Language::Others);
    }

    #[test]
    fn test_label_roundtrip() {
        for language in Language::ALL {
            assert!(!language.label().is_empty());
        }
        assert_eq!(Language::Hindi.label(), "Hindi");
        assert_eq!(Language::Others.to_string(), "Others");
    }
}
