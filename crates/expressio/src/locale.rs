//! Interface languages and their numeric conventions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LanguageParseError;

/// A supported interface language.
///
/// The language decides which character separates the integer and
/// fractional parts of a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, with `.` as decimal separator
    #[default]
    English,

    /// Portuguese, with `,` as decimal separator
    Portuguese,
}

impl Language {
    /// All languages, in menu order.
    pub const ALL: [Language; 2] = [Language::English, Language::Portuguese];

    /// The decimal separator numerals are written with.
    pub fn decimal_separator(self) -> char {
        match self {
            Language::English => '.',
            Language::Portuguese => ',',
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Portuguese => write!(f, "Português"),
        }
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "pt" | "portuguese" | "português" => Ok(Language::Portuguese),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(Language::English.decimal_separator(), '.');
        assert_eq!(Language::Portuguese.decimal_separator(), ',');
    }

    #[test]
    fn test_parse_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("PT".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!(
            "portuguese".parse::<Language>().unwrap(),
            Language::Portuguese
        );
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Language::Portuguese).unwrap();
        assert_eq!(json, "\"portuguese\"");
        let back: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(back, Language::English);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
