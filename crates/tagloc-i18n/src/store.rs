//! In-memory translation catalog for a single locale

use crate::locale::Locale;
use crate::message::SourceMessage;
use crate::translation::{parse_translation, ParsedTranslation};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Parsed translations keyed by message id
///
/// Filled once while a catalog is loaded and only read afterwards; share it
/// through an `Arc` to translate from several threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    locale: Option<Locale>,
    translations: HashMap<String, ParsedTranslation>,
}

impl TranslationStore {
    /// Create an empty store with no locale
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store for `locale`
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
            translations: HashMap::new(),
        }
    }

    /// The locale the translations are written in, if known
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    /// Add a parsed translation, returning the one it replaces
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        translation: ParsedTranslation,
    ) -> Option<ParsedTranslation> {
        let id = id.into();
        let replaced = self.translations.insert(id.clone(), translation);
        if replaced.is_some() {
            warn!("Replacing translation for message id: {:?}", id);
        }
        replaced
    }

    /// Parse `{$name}` text and add it
    pub fn insert_text(&mut self, id: impl Into<String>, text: &str) -> Option<ParsedTranslation> {
        self.insert(id, parse_translation(text))
    }

    /// Look up a translation by exact id
    pub fn get(&self, id: &str) -> Option<&ParsedTranslation> {
        self.translations.get(id)
    }

    /// Look up a message by its id, then by each of its legacy ids in order
    pub fn lookup(&self, message: &SourceMessage) -> Option<&ParsedTranslation> {
        if let Some(translation) = self.get(&message.id) {
            return Some(translation);
        }
        message.legacy_ids.iter().find_map(|legacy| {
            let found = self.get(legacy);
            if found.is_some() {
                debug!(
                    "Message {:?} matched catalog entry by legacy id {:?}",
                    message.id, legacy
                );
            }
            found
        })
    }

    /// Whether a translation exists for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.translations.contains_key(id)
    }

    /// Iterate over message ids in arbitrary order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Number of translations
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether the store has no translations
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl FromIterator<(String, ParsedTranslation)> for TranslationStore {
    fn from_iter<I: IntoIterator<Item = (String, ParsedTranslation)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<(String, ParsedTranslation)> for TranslationStore {
    fn extend<I: IntoIterator<Item = (String, ParsedTranslation)>>(&mut self, iter: I) {
        for (id, translation) in iter {
            self.insert(id, translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, legacy_ids: &[&str]) -> SourceMessage {
        SourceMessage {
            id: id.to_string(),
            text: String::new(),
            meaning: None,
            description: None,
            legacy_ids: legacy_ids.iter().map(ToString::to_string).collect(),
            message_parts: vec![String::new()],
            placeholder_names: Vec::new(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = TranslationStore::for_locale(Locale::parse("fr").unwrap());
        assert!(store.is_empty());
        assert!(store.insert_text("greeting", "Bonjour {$name}").is_none());
        assert!(store.insert_text("greeting", "Salut {$name}").is_some());

        assert_eq!(store.len(), 1);
        assert!(store.contains("greeting"));
        assert_eq!(
            store.get("greeting").unwrap().to_message_string(),
            "Salut {$name}"
        );
        assert_eq!(store.locale().unwrap().to_string(), "fr");
    }

    #[test]
    fn test_lookup_falls_back_to_legacy_ids() {
        let store: TranslationStore = [
            ("old-1".to_string(), parse_translation("ancien")),
            ("current".to_string(), parse_translation("actuel")),
        ]
        .into_iter()
        .collect();

        let found = store.lookup(&message("missing", &["nope", "old-1"])).unwrap();
        assert_eq!(found.to_message_string(), "ancien");

        let found = store.lookup(&message("current", &["old-1"])).unwrap();
        assert_eq!(found.to_message_string(), "actuel");

        assert!(store.lookup(&message("missing", &[])).is_none());
    }
}
