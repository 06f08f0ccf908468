//! Response language classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the Chronicler converses in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// The wire code (`en` / `ar`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Name shown in the language badge.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

/// Classifies `text` as Arabic if any character falls in the Arabic block,
/// English otherwise.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_arabic) {
        Language::Ar
    } else {
        Language::En
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language_digits_are_english() {
        assert_eq!(detect_language("2023"), Language::En);
    }

    #[test]
    fn test_detect_language_arabic() {
        assert_eq!(detect_language("مرحبا"), Language::Ar);
    }

    #[test]
    fn test_detect_language_single_arabic_char_wins() {
        assert_eq!(detect_language("hello مرحبا"), Language::Ar);
        assert_eq!(detect_language("Tell me about Ramses ب please"), Language::Ar);
    }

    #[test]
    fn test_detect_language_empty_defaults_to_english() {
        assert_eq!(detect_language(""), Language::En);
        assert_eq!(detect_language("   "), Language::En);
    }

    #[test]
    fn test_detect_language_block_boundaries() {
        assert_eq!(detect_language("\u{0600}"), Language::Ar);
        assert_eq!(detect_language("\u{06FF}"), Language::Ar);
        assert_eq!(detect_language("\u{05FF}"), Language::En);
        assert_eq!(detect_language("\u{0700}"), Language::En);
    }

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Language::En.display_name(), "English");
        assert_eq!(Language::Ar.display_name(), "العربية");
    }
}
