//! Error types for localization operations

use crate::message::MessageDescription;
use tagloc_common::TaglocError;
use thiserror::Error;

/// Errors that can occur while parsing, translating or loading messages
#[derive(Error, Debug)]
pub enum LocalizeError {
    /// The catalog has no entry for the message id
    #[error("No translation found for {message}.")]
    TranslationNotFound { message: MessageDescription },

    /// The translation references a placeholder the source message does not have
    #[error("No placeholder found with name {placeholder} in message {message}.")]
    PlaceholderNotFound {
        placeholder: String,
        message: MessageDescription,
    },

    /// A template must have exactly one more static part than substitutions
    #[error("Template has {parts} static parts for {substitutions} substitutions")]
    TemplateShape { parts: usize, substitutions: usize },

    /// Cooked and raw part lists differ in length
    #[error("Template has {cooked} cooked parts but {raw} raw parts")]
    RawPartsMismatch { cooked: usize, raw: usize },

    /// A raw template part contains a malformed escape sequence
    #[error("Invalid escape sequence in template text {raw:?}")]
    InvalidEscape { raw: String },

    /// Failed to parse a language identifier
    #[error("Invalid locale identifier: {0}")]
    InvalidLocale(String),

    /// No catalog adapter is registered under this name
    #[error("Unknown translation file format \"{0}\"")]
    UnknownFormat(String),

    /// A catalog file is well-formed but does not have the expected shape
    #[error("Failed to parse {format} catalog: {message}")]
    CatalogParse { format: &'static str, message: String },

    /// Two catalog entries share one message id
    #[error("Duplicate translation for message id \"{id}\"")]
    DuplicateTranslation { id: String },

    /// XML reader error
    #[error("XML error: {0}")]
    Xml(#[from] xml::reader::Error),

    /// XML writer error
    #[error("XML write error: {0}")]
    XmlWrite(#[from] xml::writer::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for localization operations
pub type LocalizeResult<T> = Result<T, LocalizeError>;

impl From<LocalizeError> for TaglocError {
    fn from(err: LocalizeError) -> Self {
        match err {
            LocalizeError::Io(io) => Self::Io(io),
            other => Self::localization_with_source(other.to_string(), other),
        }
    }
}
