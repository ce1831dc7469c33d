//! Applying a catalog translation to a template

use crate::error::{LocalizeError, LocalizeResult};
use crate::message::parse_message;
use crate::runtime::TranslateHook;
use crate::store::TranslationStore;
use crate::template::TemplateStrings;
use std::sync::Arc;
use tracing::debug;

/// Translate template strings and substitutions through `store`
///
/// The message is looked up by id (then legacy ids). The returned
/// substitutions follow the translation's placeholder order; source
/// placeholders the translation does not use are dropped, and a placeholder
/// used twice is cloned.
///
/// # Errors
///
/// [`LocalizeError::TranslationNotFound`] when the store has no entry for the
/// message, and [`LocalizeError::PlaceholderNotFound`] when the translation
/// names a placeholder the source message lacks.
pub fn translate<V: Clone>(
    store: &TranslationStore,
    strings: &TemplateStrings,
    substitutions: Vec<V>,
) -> LocalizeResult<(TemplateStrings, Vec<V>)> {
    let message = parse_message(strings, substitutions)?;

    let Some(translation) = store.lookup(&message.source) else {
        debug!(
            "No translation for message {:?} in locale {:?}",
            message.id(),
            store.locale()
        );
        return Err(LocalizeError::TranslationNotFound {
            message: message.describe(),
        });
    };

    let values = translation
        .placeholder_names
        .iter()
        .map(|name| {
            message
                .substitution(name)
                .cloned()
                .ok_or_else(|| LocalizeError::PlaceholderNotFound {
                    placeholder: name.clone(),
                    message: message.describe(),
                })
        })
        .collect::<LocalizeResult<Vec<V>>>()?;

    Ok((translation.strings.clone(), values))
}

/// Translate hook backed by a shared [`TranslationStore`]
#[derive(Debug, Clone)]
pub struct Translator {
    store: Arc<TranslationStore>,
}

impl Translator {
    /// Create a translator over `store`
    pub fn new(store: impl Into<Arc<TranslationStore>>) -> Self {
        Self {
            store: store.into(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }
}

impl<V: Clone> TranslateHook<V> for Translator {
    fn translate(
        &self,
        strings: TemplateStrings,
        substitutions: Vec<V>,
    ) -> LocalizeResult<(TemplateStrings, Vec<V>)> {
        translate(&self.store, &strings, substitutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::MessageMetadata;

    fn store() -> TranslationStore {
        let mut store = TranslationStore::new();
        store.insert_text("hello", "Bonjour {$name} ({$name})");
        store.insert_text("bad", "Salut {$nobody}");
        store
    }

    fn strings(id: &str) -> TemplateStrings {
        TemplateStrings::from_cooked(["Hello ", ":name:"])
            .unwrap()
            .with_metadata(MessageMetadata::with_id(id))
    }

    #[test]
    fn test_repeated_placeholder_is_cloned() {
        let (parts, values) = translate(&store(), &strings("hello"), vec!["Ann".to_string()]).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(values, vec!["Ann", "Ann"]);
    }

    #[test]
    fn test_missing_translation() {
        let error = translate(&store(), &strings("nope"), vec![1]).unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"No translation found for "nope" ("Hello {$name}")."#
        );
    }

    #[test]
    fn test_unknown_placeholder() {
        let error = translate(&store(), &strings("bad"), vec![1]).unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"No placeholder found with name nobody in message "bad" ("Hello {$name}")."#
        );
    }

    #[test]
    fn test_translator_hook() {
        let translator = Translator::new(store());
        let (_, values) =
            TranslateHook::translate(&translator, strings("hello"), vec![7]).unwrap();
        assert_eq!(values, vec![7, 7]);
        assert_eq!(translator.store().len(), 2);
    }
}
