//! Validation functions and regex patterns used by the settings schema

use regex::Regex;
use std::sync::LazyLock;
use tagloc_i18n::assets::{LOCALE_TOKEN, PATH_TOKEN};
use tagloc_i18n::{FormatKind, Locale};
use validator::ValidationError;

/// Matches `{token}` substitutions in an output path template
pub static OUTPUT_PATH_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[^{}]*\}").expect("Invalid output path token regex pattern")
});

/// Validate a BCP-47 locale tag
pub fn validate_locale(locale: &str) -> Result<(), ValidationError> {
    if locale.is_empty() {
        return Err(ValidationError::new("empty_locale"));
    }
    Locale::parse(locale)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_locale"))
}

/// Validate a catalog format name
pub fn validate_format_name(format: &str) -> Result<(), ValidationError> {
    FormatKind::from_name(format)
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_format"))
}

/// Validate an output path template
///
/// It must mention `{locale}` so locales do not overwrite each other, and may
/// use no token other than `{locale}` and `{path}`.
pub fn validate_output_path(template: &str) -> Result<(), ValidationError> {
    if !template.contains(LOCALE_TOKEN) {
        return Err(ValidationError::new("missing_locale_token"));
    }
    let unknown = OUTPUT_PATH_TOKEN_REGEX
        .find_iter(template)
        .any(|token| token.as_str() != LOCALE_TOKEN && token.as_str() != PATH_TOKEN);
    if unknown {
        return Err(ValidationError::new("unknown_output_path_token"));
    }
    Ok(())
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_token_regex() {
        let tokens: Vec<&str> = OUTPUT_PATH_TOKEN_REGEX
            .find_iter("dist/{locale}/{path}.{ext}")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(tokens, vec!["{locale}", "{path}", "{ext}"]);
    }

    #[test]
    fn test_validate_locale() {
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("en-US").is_ok());
        assert!(validate_locale("zh-Hant-TW").is_ok());

        assert!(validate_locale("").is_err());
        assert!(validate_locale("english please").is_err());
    }

    #[test]
    fn test_validate_format_name() {
        assert!(validate_format_name("json").is_ok());
        assert!(validate_format_name("xlf").is_ok());
        assert!(validate_format_name("xmb").is_err());
        assert!(validate_format_name("").is_err());
    }

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path("dist/{locale}/{path}").is_ok());
        assert!(validate_output_path("dist/{locale}").is_ok());

        assert!(validate_output_path("dist/{path}").is_err()); // No locale
        assert!(validate_output_path("dist/{locale}/{file}").is_err()); // Unknown token
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("locales/messages.fr.json").is_ok());
        assert!(validate_file_path("C:\\locales\\messages.xlf").is_ok());

        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("messages?.json").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(validate_log_level(level).is_ok(), "Level {level} should be valid");
        }
        assert!(validate_log_level("verbose").is_err());
    }
}
