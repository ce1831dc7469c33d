//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use tagloc_common::{Result as TaglocResult, TaglocError};
use tagloc_i18n::LocalizeError;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "TAGLOC_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// A locale or format setting could not be used
    #[error("Invalid localization setting: {0}")]
    Localization(#[from] LocalizeError),

    /// A configured catalog could not be loaded
    #[error("Failed to load translation catalog {path}: {source}")]
    Catalog {
        path: String,
        #[source]
        source: LocalizeError,
    },
}

impl From<ConfigError> for TaglocError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(errors) => {
                let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                fields.sort_unstable();
                if fields.is_empty() {
                    Self::validation(errors.to_string())
                } else {
                    Self::validation_field(errors.to_string(), fields.join(", "))
                }
            }
            ConfigError::MissingConfig(message) => Self::config(message),
            other => Self::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Loading configuration file: {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        info!(
            "Loaded configuration with {} translation catalogs",
            config.translations.len()
        );
        Ok(config)
    }

    /// Load configuration from `TAGLOC_CONFIG_PATH`, `tagloc.yaml` or
    /// `tagloc.yml`, falling back to defaults
    pub fn load() -> TaglocResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if Path::new("tagloc.yaml").exists() {
            Self::load_config("tagloc.yaml")?
        } else if Path::new("tagloc.yml").exists() {
            Self::load_config("tagloc.yml")?
        } else {
            debug!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TaglocResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(locale) = env::var("TAGLOC_SOURCE_LOCALE") {
            config.source_locale = locale;
        }

        if let Ok(format) = env::var("TAGLOC_FORMAT") {
            config.format = format;
        }

        if let Ok(output_path) = env::var("TAGLOC_OUTPUT_PATH") {
            config.output_path = output_path;
        }

        if let Ok(use_legacy_ids) = env::var("TAGLOC_USE_LEGACY_IDS") {
            config.use_legacy_ids = use_legacy_ids
                .parse()
                .map_err(|e| ConfigError::EnvParseError {
                    var: "TAGLOC_USE_LEGACY_IDS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(level) = env::var("TAGLOC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("TAGLOC_LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const OVERRIDE_VARS: [&str; 7] = [
        CONFIG_PATH_VAR,
        "TAGLOC_SOURCE_LOCALE",
        "TAGLOC_FORMAT",
        "TAGLOC_OUTPUT_PATH",
        "TAGLOC_USE_LEGACY_IDS",
        "TAGLOC_LOG_LEVEL",
        "TAGLOC_LOG_FILE",
    ];

    fn clear_env() {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
    }

    /// Create a temporary YAML config file for testing
    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    #[test]
    #[serial]
    fn test_load_valid_yaml_config() {
        clear_env();
        let yaml_content = "source_locale: en-GB\nformat: xliff\noutput_path: \"out/{locale}/{path}\"\nuse_legacy_ids: true\ncopy_source_locale: false\ntranslations:\n  - locale: fr\n    path: locales/messages.fr.xlf\n  - locale: de\n    path: locales/messages.de.json\n    format: json\nlogging:\n  level: debug\n  json: true";

        let temp_file = create_test_config_file(yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        assert_eq!(config.source_locale, "en-GB");
        assert_eq!(config.format, "xliff");
        assert!(config.use_legacy_ids);
        assert!(!config.copy_source_locale);
        assert_eq!(config.translations.len(), 2);
        assert_eq!(config.translations[1].format.as_deref(), Some("json"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    #[serial]
    fn test_load_minimal_config() {
        clear_env();
        let temp_file = create_test_config_file("translations: []\n");
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");
        assert_eq!(config.source_locale, "en-US");
        assert_eq!(config.output_path, "dist/{locale}/{path}");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("TAGLOC_SOURCE_LOCALE", "pt-BR");
        env::set_var("TAGLOC_FORMAT", "xlf");
        env::set_var("TAGLOC_USE_LEGACY_IDS", "true");
        env::set_var("TAGLOC_LOG_FILE", "tagloc.log");

        let temp_file = create_test_config_file("source_locale: en\n");
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");
        clear_env();

        assert_eq!(config.source_locale, "pt-BR");
        assert_eq!(config.format, "xlf");
        assert!(config.use_legacy_ids);
        assert_eq!(config.logging.file.as_deref(), Some("tagloc.log"));
    }

    #[test]
    #[serial]
    fn test_invalid_env_override() {
        clear_env();
        env::set_var("TAGLOC_USE_LEGACY_IDS", "sometimes");

        let temp_file = create_test_config_file("source_locale: en\n");
        let result = ConfigLoader::load_config(temp_file.path());
        clear_env();

        match result {
            Err(ConfigError::EnvParseError { var, .. }) => {
                assert_eq!(var, "TAGLOC_USE_LEGACY_IDS");
            }
            other => panic!("Expected EnvParseError, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_invalid_config_values() {
        clear_env();
        let temp_file = create_test_config_file("source_locale: en\nformat: xmb\n");
        let result = ConfigLoader::load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let temp_file = create_test_config_file("source_locale: [unclosed\n");
        let result = ConfigLoader::load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    #[serial]
    fn test_load_from_env_path() {
        clear_env();
        let temp_file = create_test_config_file("source_locale: ja\n");
        env::set_var(CONFIG_PATH_VAR, temp_file.path());

        let config = ConfigLoader::load().expect("Failed to load config");
        clear_env();
        assert_eq!(config.source_locale, "ja");
    }

    #[test]
    #[serial]
    fn test_invalid_values_become_validation_errors() {
        clear_env();
        let temp_file = create_test_config_file("format: xmb\nsource_locale: en\n");
        let error = ConfigLoader::load_from_file(temp_file.path()).unwrap_err();

        assert!(matches!(error, TaglocError::Validation { .. }));
        assert_eq!(error.field(), Some("format"));
        assert!(error.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_missing_config_conversion() {
        let error: TaglocError = ConfigError::MissingConfig("no catalog".to_string()).into();
        assert_eq!(error.to_string(), "Configuration error: no catalog");
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_from_file("/nonexistent/tagloc.yaml");
        let error = result.unwrap_err();
        assert!(error.to_string().contains("Configuration error"));
    }
}
