//! Flat JSON catalogs
//!
//! ```json
//! {
//!   "locale": "fr",
//!   "translations": {
//!     "greeting": "Bonjour {$name} !"
//!   }
//! }
//! ```
//!
//! A message id repeated inside `translations` is rejected, as it is for
//! XLIFF trans-units.

use super::{unique_by_id, TranslationFormat};
use crate::error::{LocalizeError, LocalizeResult};
use crate::locale::Locale;
use crate::message::SourceMessage;
use crate::store::TranslationStore;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct JsonCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<Locale>,
    translations: Entries,
}

/// `translations` entries in file order, repeated ids included
#[derive(Debug, Default)]
struct Entries(Vec<(String, String)>);

impl Serialize for Entries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(id, text)| (id, text)))
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Entries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of message ids to translations")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(Entries(entries))
    }
}

/// JSON catalog format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl TranslationFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, contents: &str) -> LocalizeResult<TranslationStore> {
        let catalog: JsonCatalog = serde_json::from_str(contents).map_err(|err| {
            if err.is_data() {
                LocalizeError::CatalogParse {
                    format: "json",
                    message: err.to_string(),
                }
            } else {
                LocalizeError::Json(err)
            }
        })?;

        let mut store = TranslationStore::new();
        if let Some(locale) = catalog.locale {
            store.set_locale(locale);
        }
        for (id, text) in catalog.translations.0 {
            if store.contains(&id) {
                return Err(LocalizeError::DuplicateTranslation { id });
            }
            store.insert_text(id, &text);
        }

        debug!(
            "Parsed JSON catalog with {} translations for locale {:?}",
            store.len(),
            store.locale()
        );
        Ok(store)
    }

    fn serialize(
        &self,
        source_locale: &Locale,
        messages: &[SourceMessage],
    ) -> LocalizeResult<String> {
        let entries = unique_by_id(messages, |message| message.id.as_str())
            .into_iter()
            .map(|(id, message)| (id.to_string(), message.text.clone()))
            .collect();
        let catalog = JsonCatalog {
            locale: Some(source_locale.clone()),
            translations: Entries(entries),
        };
        Ok(serde_json::to_string_pretty(&catalog)?)
    }
}
