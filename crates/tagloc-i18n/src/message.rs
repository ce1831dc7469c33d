//! Canonical, placeholder-keyed view of a source message

use crate::error::{LocalizeError, LocalizeResult};
use crate::placeholder::derive_placeholder_name;
use crate::template::TemplateStrings;
use indexmap::IndexMap;
use std::fmt;
use tracing::trace;

/// The value-independent part of a parsed source message
///
/// This is what extraction writes into catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMessage {
    /// Stable id used for catalog lookup
    pub id: String,
    /// The message rendered with `{$name}` tokens in place of substitutions
    pub text: String,
    /// Disambiguation context
    pub meaning: Option<String>,
    /// Description for translators
    pub description: Option<String>,
    /// Alternate ids for older catalogs
    pub legacy_ids: Vec<String>,
    /// Static text with placeholder-name annotations removed
    pub message_parts: Vec<String>,
    /// Placeholder names in source order, one per substitution slot
    pub placeholder_names: Vec<String>,
}

impl SourceMessage {
    /// Summary used in error messages
    pub fn describe(&self) -> MessageDescription {
        MessageDescription {
            id: self.id.clone(),
            text: self.text.clone(),
            meaning: self.meaning.clone(),
        }
    }
}

/// A source message together with its substitution values keyed by name
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage<V> {
    /// Text, identity and placeholder layout
    pub source: SourceMessage,
    /// Substitution values keyed by placeholder name, in source order
    pub substitutions: IndexMap<String, V>,
}

impl<V> ParsedMessage<V> {
    /// The message id
    pub fn id(&self) -> &str {
        &self.source.id
    }

    /// The message text with `{$name}` tokens
    pub fn text(&self) -> &str {
        &self.source.text
    }

    /// The meaning, if any
    pub fn meaning(&self) -> Option<&str> {
        self.source.meaning.as_deref()
    }

    /// Look up the value bound to a placeholder name
    pub fn substitution(&self, name: &str) -> Option<&V> {
        self.substitutions.get(name)
    }

    /// Summary used in error messages
    pub fn describe(&self) -> MessageDescription {
        self.source.describe()
    }

    /// Drop the substitution values
    pub fn into_source(self) -> SourceMessage {
        self.source
    }
}

/// Human-readable identification of a message for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescription {
    /// Message id
    pub id: String,
    /// Message text with `{$name}` tokens
    pub text: String,
    /// Meaning, if any
    pub meaning: Option<String>,
}

impl fmt::Display for MessageDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" (\"{}\"", self.id, self.text)?;
        if let Some(meaning) = self.meaning.as_deref().filter(|m| !m.is_empty()) {
            write!(f, " - \"{meaning}\"")?;
        }
        f.write_str(")")
    }
}

/// Parse template strings and their substitutions into a [`ParsedMessage`]
///
/// Each part after the first names the substitution before it, explicitly
/// through a `:name:` annotation or implicitly by the slot's 0-based index.
/// If two slots share a name, the later value replaces the earlier one.
///
/// The message id comes from the template's metadata; a template without one
/// is identified by its rendered text.
pub fn parse_message<V>(
    strings: &TemplateStrings,
    substitutions: Vec<V>,
) -> LocalizeResult<ParsedMessage<V>> {
    if strings.len() != substitutions.len() + 1 {
        return Err(LocalizeError::TemplateShape {
            parts: strings.len(),
            substitutions: substitutions.len(),
        });
    }

    let head = strings.head().cooked();
    let mut text = head.to_string();
    let mut message_parts = vec![head.to_string()];
    let mut placeholder_names = Vec::with_capacity(substitutions.len());
    let mut values = IndexMap::with_capacity(substitutions.len());

    for (index, (part, value)) in strings.tail().iter().zip(substitutions).enumerate() {
        let (name, part_text) = derive_placeholder_name(part, index);
        text.push_str("{$");
        text.push_str(&name);
        text.push('}');
        text.push_str(part_text);
        message_parts.push(part_text.to_string());
        placeholder_names.push(name.clone());
        values.insert(name, value);
    }

    let metadata = strings.metadata();
    let id = match metadata.id {
        Some(ref id) => id.clone(),
        None => {
            trace!("Template has no message id, identifying it by text: {:?}", text);
            text.clone()
        }
    };

    Ok(ParsedMessage {
        source: SourceMessage {
            id,
            text,
            meaning: metadata.meaning.clone(),
            description: metadata.description.clone(),
            legacy_ids: metadata.legacy_ids.clone(),
            message_parts,
            placeholder_names,
        },
        substitutions: values,
    })
}
