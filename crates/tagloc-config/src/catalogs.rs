//! Wiring configured catalogs into translation stores and localizers

use crate::loader::ConfigError;
use crate::settings::{Config, TranslationFileConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tagloc_common::{with_context, Result as TaglocResult};
use tagloc_i18n::{
    output_path_fn, AssetTranslationHandler, Diagnostics, Locale, LocalizeError, Localizer,
    OutputPathFn, SourceMessage, TranslationStore,
};
use tracing::{debug, info, warn};

/// Loads the catalogs named in a [`Config`] and builds what uses them
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    config: Config,
    base_dir: PathBuf,
}

impl CatalogLoader {
    /// Resolve catalog paths relative to the working directory
    pub fn new(config: Config) -> Self {
        Self::with_base_dir(config, ".")
    }

    /// Resolve catalog paths relative to `base_dir`
    pub fn with_base_dir(config: Config, base_dir: impl AsRef<Path>) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging from the configured settings
    pub fn init_logging(&self) -> TaglocResult<()> {
        tagloc_common::init_logging(self.config.logging.to_logging_config())
    }

    /// Target locales in configuration order
    pub fn target_locales(&self) -> Result<Vec<Locale>, ConfigError> {
        self.config
            .translations
            .iter()
            .map(|file| Locale::parse(&file.locale).map_err(ConfigError::from))
            .collect()
    }

    /// Read and parse one configured catalog
    ///
    /// The configured locale wins over one declared inside the file.
    pub fn load_store(&self, file: &TranslationFileConfig) -> Result<TranslationStore, ConfigError> {
        let path = self.base_dir.join(&file.path);
        let catalog_error = |source: LocalizeError| ConfigError::Catalog {
            path: path.display().to_string(),
            source,
        };

        let locale = Locale::parse(&file.locale)?;
        let kind = file.format_kind(self.config.format_kind()?)?;
        debug!("Loading {} catalog: {:?}", kind, path);

        let contents = fs::read_to_string(&path).map_err(|err| catalog_error(err.into()))?;
        let mut store = kind
            .create(self.config.format_options())
            .parse(&contents)
            .map_err(catalog_error)?;

        if let Some(declared) = store.locale() {
            if declared != &locale {
                warn!(
                    "Catalog {:?} declares locale {:?} but is configured for {:?}",
                    path, declared, locale
                );
            }
        }
        store.set_locale(locale);

        info!(
            "Loaded {} translations for locale {}",
            store.len(),
            file.locale
        );
        Ok(store)
    }

    /// Load every configured catalog in configuration order
    pub fn load_all(&self) -> Result<Vec<TranslationStore>, ConfigError> {
        self.config
            .translations
            .iter()
            .map(|file| self.load_store(file))
            .collect()
    }

    /// Build a translating localizer for `locale`
    pub fn localizer_for<V: Clone>(&self, locale: &Locale) -> Result<Localizer<V>, ConfigError> {
        let file = self
            .config
            .translations
            .iter()
            .find(|file| Locale::parse(&file.locale).is_ok_and(|configured| &configured == locale))
            .ok_or_else(|| {
                ConfigError::MissingConfig(format!("no translation file for locale {locale}"))
            })?;
        Ok(Localizer::with_translations(self.load_store(file)?))
    }

    /// Build one translating localizer per configured catalog
    pub fn localizers<V: Clone>(&self) -> Result<Vec<(Locale, Localizer<V>)>, ConfigError> {
        let locales = self.target_locales()?;
        let stores = self.load_all()?;
        Ok(locales
            .into_iter()
            .zip(stores)
            .map(|(locale, store)| (locale, Localizer::with_translations(store)))
            .collect())
    }

    /// The configured output path template as a function
    pub fn output_path_fn(&self) -> Box<OutputPathFn> {
        output_path_fn(&self.config.output_path)
    }

    /// Copy an asset with no messages into every locale's output
    ///
    /// The source locale gets a copy too when `copy_source_locale` is set.
    /// Write failures are recorded in `diagnostics`.
    pub fn copy_asset(
        &self,
        diagnostics: &mut Diagnostics,
        relative_path: &Path,
        contents: &[u8],
    ) -> Result<(), ConfigError> {
        let target_locales = self.target_locales()?;
        let source_locale = if self.config.copy_source_locale {
            Some(self.config.source_locale()?)
        } else {
            None
        };

        let handler = AssetTranslationHandler;
        if handler.can_translate(relative_path, contents) {
            handler.translate(
                diagnostics,
                relative_path,
                contents,
                &self.output_path_fn(),
                &target_locales,
                source_locale.as_ref(),
            );
        }
        Ok(())
    }

    /// Serialize extracted source messages in the configured format
    pub fn serialize_messages(&self, messages: &[SourceMessage]) -> Result<String, ConfigError> {
        let source_locale = self.config.source_locale()?;
        let format = self
            .config
            .format_kind()?
            .create(self.config.format_options());
        Ok(format.serialize(&source_locale, messages)?)
    }

    /// Serialize extracted source messages and write them to `path`
    pub fn write_messages(&self, path: &Path, messages: &[SourceMessage]) -> TaglocResult<()> {
        let output = self.serialize_messages(messages)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| with_context!(e, "Failed to create {}", parent.display()))?;
        }
        fs::write(path, output).map_err(|e| with_context!(e, "Failed to write {}", path.display()))?;
        info!("Wrote {} messages to {:?}", messages.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(files: Vec<TranslationFileConfig>) -> Config {
        Config {
            translations: files,
            ..Config::default()
        }
    }

    fn file(locale: &str, path: &str) -> TranslationFileConfig {
        TranslationFileConfig {
            locale: locale.to_string(),
            path: path.to_string(),
            format: None,
        }
    }

    #[test]
    fn test_configured_locale_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fr.json"),
            r#"{"locale": "fr-CA", "translations": {"a": "b"}}"#,
        )
        .unwrap();

        let loader = CatalogLoader::with_base_dir(config_with(vec![file("fr", "fr.json")]), dir.path());
        let store = loader.load_store(&loader.config().translations[0]).unwrap();
        assert_eq!(store.locale().unwrap().to_string(), "fr");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_file_names_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogLoader::with_base_dir(config_with(vec![file("fr", "nope.json")]), dir.path());
        let error = loader.load_all().unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Catalog {
                source: LocalizeError::Io(_),
                ..
            }
        ));
        assert!(error.to_string().contains("nope.json"));
    }

    #[test]
    fn test_malformed_catalog_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), r#"{"locale": "fr"}"#).unwrap();

        let loader = CatalogLoader::with_base_dir(config_with(vec![file("fr", "fr.json")]), dir.path());
        let error = loader.load_all().unwrap_err();
        assert!(matches!(error, ConfigError::Catalog { .. }));
        assert!(error.to_string().contains("fr.json"));
    }

    #[test]
    fn test_localizer_for_unconfigured_locale() {
        let loader = CatalogLoader::new(config_with(Vec::new()));
        let result = loader.localizer_for::<String>(&Locale::parse("it").unwrap());
        assert!(matches!(result, Err(ConfigError::MissingConfig(_))));
    }
}
