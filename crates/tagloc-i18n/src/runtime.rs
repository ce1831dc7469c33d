//! Run-time entry point: optional translation followed by string assembly
//!
//! ```rust
//! use tagloc_i18n::{Localizer, TemplateLiteral, TemplateStrings, TranslationStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let strings = TemplateStrings::from_cooked(["Hello ", ":name:!"])?;
//!
//! let localizer = Localizer::pass_through();
//! let text = localizer.localize(TemplateLiteral::new(strings.clone(), vec!["World"])?)?;
//! assert_eq!(text, "Hello World!");
//!
//! let mut store = TranslationStore::new();
//! store.insert_text("Hello {$name}!", "Bonjour {$name} !");
//! let localizer = Localizer::with_translations(store);
//! let text = localizer.localize(TemplateLiteral::new(strings, vec!["World"])?)?;
//! assert_eq!(text, "Bonjour World !");
//! # Ok(())
//! # }
//! ```

use crate::error::{LocalizeError, LocalizeResult};
use crate::placeholder::strip_placeholder_name;
use crate::store::TranslationStore;
use crate::template::{TemplateLiteral, TemplateStrings};
use crate::translator::Translator;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Rewrites a template before it is assembled
///
/// The hook takes ownership of the static parts and substitutions and returns
/// the pair to assemble. Any closure with the matching signature is a hook.
pub trait TranslateHook<V> {
    /// Produce the template to assemble in place of the given one
    fn translate(
        &self,
        strings: TemplateStrings,
        substitutions: Vec<V>,
    ) -> LocalizeResult<(TemplateStrings, Vec<V>)>;
}

impl<V, F> TranslateHook<V> for F
where
    F: Fn(TemplateStrings, Vec<V>) -> LocalizeResult<(TemplateStrings, Vec<V>)>,
{
    fn translate(
        &self,
        strings: TemplateStrings,
        substitutions: Vec<V>,
    ) -> LocalizeResult<(TemplateStrings, Vec<V>)> {
        self(strings, substitutions)
    }
}

/// Turns template literals into final strings
///
/// Without a hook the literal is only assembled, which still strips
/// placeholder-name annotations from its text.
pub struct Localizer<V> {
    hook: Option<Arc<dyn TranslateHook<V> + Send + Sync>>,
}

impl<V> Localizer<V> {
    /// A localizer that assembles literals untranslated
    pub fn pass_through() -> Self {
        Self { hook: None }
    }

    /// A localizer that runs `hook` before assembly
    pub fn with_hook<H>(hook: H) -> Self
    where
        H: TranslateHook<V> + Send + Sync + 'static,
    {
        Self {
            hook: Some(Arc::new(hook)),
        }
    }

    /// Whether a translate hook is installed
    pub fn is_translating(&self) -> bool {
        self.hook.is_some()
    }
}

impl<V: Clone> Localizer<V> {
    /// A localizer that translates through `store`
    pub fn with_translations(store: impl Into<Arc<TranslationStore>>) -> Self {
        Self::with_hook(Translator::new(store))
    }
}

impl<V: Display> Localizer<V> {
    /// Translate (if a hook is installed) and assemble a template literal
    ///
    /// # Errors
    ///
    /// Propagates the hook's error, or [`LocalizeError::TemplateShape`] when
    /// the hook returns mismatched parts and substitutions.
    pub fn localize(&self, literal: TemplateLiteral<V>) -> LocalizeResult<String> {
        let (strings, substitutions) = literal.into_parts();
        let (strings, substitutions) = match &self.hook {
            Some(hook) => hook.translate(strings, substitutions)?,
            None => (strings, substitutions),
        };
        assemble(&strings, &substitutions)
    }

    /// Shorthand for [`Localizer::localize`] on separate parts
    ///
    /// # Errors
    ///
    /// See [`Localizer::localize`].
    pub fn localize_parts(
        &self,
        strings: TemplateStrings,
        substitutions: Vec<V>,
    ) -> LocalizeResult<String> {
        self.localize(TemplateLiteral::new(strings, substitutions)?)
    }
}

impl<V> Default for Localizer<V> {
    fn default() -> Self {
        Self::pass_through()
    }
}

impl<V> Clone for Localizer<V> {
    fn clone(&self) -> Self {
        Self {
            hook: self.hook.clone(),
        }
    }
}

impl<V> fmt::Debug for Localizer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("translating", &self.is_translating())
            .finish()
    }
}

/// Interleave parts and substitutions, stripping name annotations
fn assemble<V: Display>(strings: &TemplateStrings, substitutions: &[V]) -> LocalizeResult<String> {
    if strings.len() != substitutions.len() + 1 {
        return Err(LocalizeError::TemplateShape {
            parts: strings.len(),
            substitutions: substitutions.len(),
        });
    }

    let mut message = strings.head().cooked().to_string();
    for (part, value) in strings.tail().iter().zip(substitutions) {
        message.push_str(&value.to_string());
        message.push_str(strip_placeholder_name(part.cooked(), part.raw()));
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal<V>(parts: &[&str], values: Vec<V>) -> TemplateLiteral<V> {
        TemplateLiteral::new(TemplateStrings::from_cooked(parts.iter().copied()).unwrap(), values)
            .unwrap()
    }

    #[test]
    fn test_pass_through_strips_names() {
        let localizer = Localizer::pass_through();
        let text = localizer
            .localize(literal(&["Hi ", ":who:, you have ", ":count: items"], vec!["Ann", "3"]))
            .unwrap();
        assert_eq!(text, "Hi Ann, you have 3 items");
        assert!(!localizer.is_translating());
    }

    #[test]
    fn test_closure_hook() {
        let localizer = Localizer::with_hook(
            |strings: TemplateStrings, mut values: Vec<i32>| -> LocalizeResult<_> {
                values.iter_mut().for_each(|v| *v *= 10);
                Ok((strings, values))
            },
        );
        let text = localizer.localize(literal(&["n=", ""], vec![4])).unwrap();
        assert_eq!(text, "n=40");
        assert!(localizer.is_translating());
    }

    #[test]
    fn test_hook_error_propagates() {
        let localizer = Localizer::with_hook(
            |_: TemplateStrings, _: Vec<i32>| -> LocalizeResult<(TemplateStrings, Vec<i32>)> {
                Err(LocalizeError::UnknownFormat("none".to_string()))
            },
        );
        assert!(localizer.localize(literal(&["x"], vec![])).is_err());
    }

    #[test]
    fn test_malformed_hook_result_is_rejected() {
        let localizer = Localizer::with_hook(
            |strings: TemplateStrings, _: Vec<i32>| -> LocalizeResult<(TemplateStrings, Vec<i32>)> {
                Ok((strings, Vec::new()))
            },
        );
        let error = localizer.localize(literal(&["a", "b"], vec![1])).unwrap_err();
        assert!(matches!(error, LocalizeError::TemplateShape { .. }));
    }

    #[test]
    fn test_localize_parts_checks_shape() {
        let localizer = Localizer::<u8>::default();
        let strings = TemplateStrings::from_cooked(["a", "b"]).unwrap();
        assert!(localizer.localize_parts(strings, vec![]).is_err());
    }
}
