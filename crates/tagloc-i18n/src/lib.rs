//! # Tagloc I18n
//!
//! Localization of tagged template strings.
//!
//! A template such as `` `Hello ${name}:who:!` `` reaches this crate as its
//! static parts plus the substitution values. From there the crate can:
//!
//! - parse it into a placeholder-keyed [`ParsedMessage`] identified by a stable id
//! - look that id up in a [`TranslationStore`] loaded from a catalog file
//! - reorder (or drop) the substitutions to fit the translated text
//! - assemble the final string through a [`Localizer`]
//!
//! Catalogs are read and written by the adapters in [`formats`]; files with no
//! messages are copied per locale by [`AssetTranslationHandler`].
//!
//! # Example
//!
//! ```rust
//! use tagloc_i18n::{
//!     FormatKind, FormatOptions, Localizer, MessageMetadata, TemplateLiteral, TemplateStrings,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = r#"{"locale": "fr", "translations": {"pair": "{$1} et {$0}"}}"#;
//! let store = FormatKind::Json.create(FormatOptions::default()).parse(catalog)?;
//! let localizer = Localizer::with_translations(store);
//!
//! let strings = TemplateStrings::from_cooked(["", " and ", ""])?
//!     .with_metadata(MessageMetadata::with_id("pair"));
//! let text = localizer.localize(TemplateLiteral::new(strings, vec!["salt", "pepper"])?)?;
//! assert_eq!(text, "pepper et salt");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod locale;
pub mod message;
pub mod placeholder;
pub mod runtime;
pub mod store;
pub mod template;
pub mod translation;
pub mod translator;

pub use assets::{output_path_fn, AssetTranslationHandler, OutputPathFn};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{LocalizeError, LocalizeResult};
pub use formats::{FormatKind, FormatOptions, TranslationFormat};
pub use locale::Locale;
pub use message::{parse_message, MessageDescription, ParsedMessage, SourceMessage};
pub use placeholder::{strip_placeholder_name, PLACEHOLDER_NAME_MARKER};
pub use runtime::{Localizer, TranslateHook};
pub use store::TranslationStore;
pub use template::{MessageMetadata, TemplateLiteral, TemplatePart, TemplateStrings};
pub use translation::{parse_translation, ParsedTranslation};
pub use translator::{translate, Translator};
