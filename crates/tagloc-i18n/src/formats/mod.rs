//! Catalog file formats
//!
//! Each format reads a translation file into a [`TranslationStore`] and writes
//! extracted source messages out as a file translators can work on. Formats are
//! chosen by name through [`FormatKind`].

pub mod json;
pub mod xliff1;

pub use json::JsonFormat;
pub use xliff1::Xliff1Format;

use crate::error::{LocalizeError, LocalizeResult};
use crate::locale::Locale;
use crate::message::SourceMessage;
use crate::store::TranslationStore;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Reads and writes one catalog file format
pub trait TranslationFormat {
    /// Canonical format name
    fn name(&self) -> &'static str;

    /// Parse catalog contents into a store
    ///
    /// # Errors
    ///
    /// Returns an error when the contents are malformed or contain duplicate
    /// message ids.
    fn parse(&self, contents: &str) -> LocalizeResult<TranslationStore>;

    /// Serialize extracted source messages for translation
    ///
    /// Messages sharing an id are written once, from the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be encoded.
    fn serialize(
        &self,
        source_locale: &Locale,
        messages: &[SourceMessage],
    ) -> LocalizeResult<String>;
}

/// Options that affect how catalogs are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Write the legacy id of each message instead of its canonical id, where
    /// the format supports it
    pub use_legacy_ids: bool,
}

/// The supported catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `{"locale": ..., "translations": {...}}`
    Json,
    /// XLIFF 1.2
    Xliff1,
}

impl FormatKind {
    /// All supported formats
    pub const ALL: [Self; 2] = [Self::Json, Self::Xliff1];

    /// Look a format up by name (case-insensitive)
    pub fn from_name(name: &str) -> LocalizeResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xliff" | "xlf" | "xliff1" => Ok(Self::Xliff1),
            _ => Err(LocalizeError::UnknownFormat(name.to_string())),
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> LocalizeResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| LocalizeError::UnknownFormat(path.display().to_string()))?;
        Self::from_name(extension)
    }

    /// Canonical name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xliff1 => "xliff",
        }
    }

    /// Conventional file extension
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xliff1 => "xlf",
        }
    }

    /// Build the format implementation
    pub fn create(self, options: FormatOptions) -> Box<dyn TranslationFormat + Send + Sync> {
        match self {
            Self::Json => Box::new(JsonFormat),
            Self::Xliff1 => Box::new(Xliff1Format::new(options.use_legacy_ids)),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = LocalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Drop later messages that repeat an id, keeping source order
pub(crate) fn unique_by_id<'a, F>(
    messages: &'a [SourceMessage],
    id_of: F,
) -> Vec<(&'a str, &'a SourceMessage)>
where
    F: Fn(&'a SourceMessage) -> &'a str,
{
    let mut seen = HashSet::new();
    messages
        .iter()
        .filter_map(|message| {
            let id = id_of(message);
            if seen.insert(id) {
                Some((id, message))
            } else {
                debug!("Skipping repeated message id: {:?}", id);
                None
            }
        })
        .collect()
}
