//! Locale identifiers

use crate::error::{LocalizeError, LocalizeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A validated BCP-47 locale tag such as `en-US` or `fr`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// Parse a locale from a language code
    pub fn parse(code: &str) -> LocalizeResult<Self> {
        code.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| LocalizeError::InvalidLocale(code.to_string()))
    }

    /// Get the primary language subtag (`fr` for `fr-CA`)
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Borrow the underlying language identifier
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(LanguageIdentifier::default())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Locale {
    type Err = LocalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocalizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let locale = Locale::parse("fr-CA").unwrap();
        assert_eq!(locale.to_string(), "fr-CA");
        assert_eq!(locale.language(), "fr");
    }

    #[test]
    fn test_invalid_locale() {
        let error = Locale::parse("not a locale!").unwrap_err();
        assert!(matches!(error, LocalizeError::InvalidLocale(_)));
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let locale: Locale = serde_json::from_str("\"de-DE\"").unwrap();
        assert_eq!(locale, Locale::parse("de-DE").unwrap());
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"de-DE\"");
        assert!(serde_json::from_str::<Locale>("\"??\"").is_err());
    }
}
