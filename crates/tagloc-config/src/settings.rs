//! Configuration structures

use serde::{Deserialize, Serialize};
use tagloc_common::LoggingConfig;
use tagloc_i18n::{FormatKind, FormatOptions, Locale, LocalizeResult};
use validator::Validate;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Locale the source templates are written in
    #[validate(custom(
        function = "crate::validation::validate_locale",
        message = "Source locale must be a valid BCP-47 language tag"
    ))]
    pub source_locale: String,

    /// Default catalog format name (`json`, `xliff`)
    #[validate(custom(
        function = "crate::validation::validate_format_name",
        message = "Format must be one of: json, xliff, xlf, xliff1"
    ))]
    pub format: String,

    /// Where per-locale output is written, e.g. `dist/{locale}/{path}`
    #[validate(custom(
        function = "crate::validation::validate_output_path",
        message = "Output path must contain {locale} and no tokens other than {locale} and {path}"
    ))]
    pub output_path: String,

    /// Key extracted XLIFF units by legacy id where available
    pub use_legacy_ids: bool,

    /// Also write a copy of untranslated assets for the source locale
    pub copy_source_locale: bool,

    /// Translation catalogs, one per target locale
    #[validate]
    pub translations: Vec<TranslationFileConfig>,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// One translation catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TranslationFileConfig {
    /// Locale the catalog translates into
    #[validate(custom(
        function = "crate::validation::validate_locale",
        message = "Translation locale must be a valid BCP-47 language tag"
    ))]
    pub locale: String,

    /// Path of the catalog file
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Invalid translation file path"
    ))]
    pub path: String,

    /// Format of this file, overriding [`Config::format`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "crate::validation::validate_format_name",
        message = "Format must be one of: json, xliff, xlf, xliff1"
    ))]
    pub format: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Optional log file path
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Invalid log file path"
    ))]
    pub file: Option<String>,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_locale: "en-US".to_string(),
            format: "json".to_string(),
            output_path: "dist/{locale}/{path}".to_string(),
            use_legacy_ids: false,
            copy_source_locale: true,
            translations: Vec::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.validate_translations()?;
        Ok(())
    }

    /// Check that no locale is configured twice
    fn validate_translations(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();
        let mut seen = std::collections::HashSet::new();

        for translation in &self.translations {
            if !seen.insert(translation.locale.as_str()) {
                let mut error = validator::ValidationError::new("duplicate_locale");
                error.add_param("locale".into(), &translation.locale);
                errors.add("translations", error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The parsed source locale
    pub fn source_locale(&self) -> LocalizeResult<Locale> {
        Locale::parse(&self.source_locale)
    }

    /// The default catalog format
    pub fn format_kind(&self) -> LocalizeResult<FormatKind> {
        FormatKind::from_name(&self.format)
    }

    /// Options for building catalog formats
    pub const fn format_options(&self) -> FormatOptions {
        FormatOptions {
            use_legacy_ids: self.use_legacy_ids,
        }
    }
}

impl TranslationFileConfig {
    /// The format of this file: its own setting, else `default`
    pub fn format_kind(&self, default: FormatKind) -> LocalizeResult<FormatKind> {
        self.format
            .as_deref()
            .map_or(Ok(default), FormatKind::from_name)
    }
}

impl LoggingSettings {
    /// Convert into the subscriber configuration
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            pretty_format: !self.json && self.file.is_none(),
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
