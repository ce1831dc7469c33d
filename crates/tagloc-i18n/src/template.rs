//! Template model: the static parts of a tagged string and its substitutions
//!
//! A tagged template `` `Hello ${name}:who:!` `` is handed to the tag as the
//! static parts `["Hello ", ":who:!"]` plus the substitution values `[name]`.
//! Every part exists in two variants: the *cooked* text with escape sequences
//! processed, and the *raw* text exactly as written in source. The raw text is
//! what tells an escaped `\:` apart from a placeholder-name marker.

use crate::error::{LocalizeError, LocalizeResult};

/// One static segment of a template, in cooked and raw form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplatePart {
    cooked: String,
    raw: String,
}

impl TemplatePart {
    /// Create a part from its cooked and raw text
    pub fn new(cooked: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            cooked: cooked.into(),
            raw: raw.into(),
        }
    }

    /// Create a part for a synthesized template that has no source text
    ///
    /// The raw variant is left empty, so marker detection inspects the cooked
    /// text instead.
    pub fn synthesized(cooked: impl Into<String>) -> Self {
        Self::new(cooked, String::new())
    }

    /// Create a part from source text, cooking its escape sequences
    pub fn from_raw(raw: impl Into<String>) -> LocalizeResult<Self> {
        let raw = raw.into();
        let cooked = cook(&raw)?;
        Ok(Self { cooked, raw })
    }

    /// The escape-processed text
    pub fn cooked(&self) -> &str {
        &self.cooked
    }

    /// The source text, or an empty string for synthesized parts
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Identity metadata supplied alongside a template by the extraction step
///
/// The core never computes ids; it only keys and compares by them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageMetadata {
    /// Stable message id used for catalog lookup
    pub id: Option<String>,
    /// Disambiguation context for translators
    pub meaning: Option<String>,
    /// Free-form description for translators
    pub description: Option<String>,
    /// Alternate ids for catalogs authored against an older id scheme
    pub legacy_ids: Vec<String>,
}

impl MessageMetadata {
    /// Metadata carrying only a message id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the meaning
    #[must_use]
    pub fn meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a legacy id
    #[must_use]
    pub fn legacy_id(mut self, id: impl Into<String>) -> Self {
        self.legacy_ids.push(id.into());
        self
    }
}

/// The ordered static parts of a template plus its identity metadata
///
/// Always holds at least one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStrings {
    parts: Vec<TemplatePart>,
    metadata: MessageMetadata,
}

impl TemplateStrings {
    /// Create template strings from parts
    pub fn new(parts: Vec<TemplatePart>) -> LocalizeResult<Self> {
        if parts.is_empty() {
            return Err(LocalizeError::TemplateShape {
                parts: 0,
                substitutions: 0,
            });
        }
        Ok(Self {
            parts,
            metadata: MessageMetadata::default(),
        })
    }

    /// Wrap parts already known to be non-empty
    pub(crate) fn from_parsed_parts(parts: Vec<TemplatePart>) -> Self {
        debug_assert!(!parts.is_empty());
        Self {
            parts,
            metadata: MessageMetadata::default(),
        }
    }

    /// Pair up cooked and raw parts; both lists must have the same length
    pub fn from_parts<C, R>(cooked: C, raw: R) -> LocalizeResult<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let cooked: Vec<String> = cooked.into_iter().map(Into::into).collect();
        let raw: Vec<String> = raw.into_iter().map(Into::into).collect();
        if cooked.len() != raw.len() {
            return Err(LocalizeError::RawPartsMismatch {
                cooked: cooked.len(),
                raw: raw.len(),
            });
        }
        Self::new(
            cooked
                .into_iter()
                .zip(raw)
                .map(|(cooked, raw)| TemplatePart::new(cooked, raw))
                .collect(),
        )
    }

    /// Template strings for a synthesized template (no raw text)
    pub fn from_cooked<C>(cooked: C) -> LocalizeResult<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::new(cooked.into_iter().map(TemplatePart::synthesized).collect())
    }

    /// Template strings from source text, cooking each part's escapes
    pub fn from_raw<R>(raw: R) -> LocalizeResult<Self>
    where
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let parts = raw
            .into_iter()
            .map(TemplatePart::from_raw)
            .collect::<LocalizeResult<Vec<_>>>()?;
        Self::new(parts)
    }

    /// Attach identity metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The static parts in order
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// The identity metadata
    pub fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    /// Number of static parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether there are no parts, which construction rules out
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The first static part, which never carries a placeholder name
    pub fn head(&self) -> &TemplatePart {
        &self.parts[0]
    }

    /// The parts following each substitution slot
    pub fn tail(&self) -> &[TemplatePart] {
        &self.parts[1..]
    }
}

/// A complete tagged template: static parts interleaved with substitutions
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral<V> {
    strings: TemplateStrings,
    substitutions: Vec<V>,
}

impl<V> TemplateLiteral<V> {
    /// Create a template literal, checking that there is exactly one more part
    /// than substitutions
    pub fn new(strings: TemplateStrings, substitutions: Vec<V>) -> LocalizeResult<Self> {
        if strings.len() != substitutions.len() + 1 {
            return Err(LocalizeError::TemplateShape {
                parts: strings.len(),
                substitutions: substitutions.len(),
            });
        }
        Ok(Self {
            strings,
            substitutions,
        })
    }

    /// The static parts
    pub fn strings(&self) -> &TemplateStrings {
        &self.strings
    }

    /// The substitution values
    pub fn substitutions(&self) -> &[V] {
        &self.substitutions
    }

    /// Split into static parts and substitutions
    pub fn into_parts(self) -> (TemplateStrings, Vec<V>) {
        (self.strings, self.substitutions)
    }
}

/// Process the escape sequences of a raw template part
fn cook(raw: &str) -> LocalizeResult<String> {
    let invalid = || LocalizeError::InvalidEscape {
        raw: raw.to_string(),
    };

    let mut cooked = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next().ok_or_else(invalid)? {
            'n' => cooked.push('\n'),
            't' => cooked.push('\t'),
            'r' => cooked.push('\r'),
            'b' => cooked.push('\u{8}'),
            'f' => cooked.push('\u{c}'),
            'v' => cooked.push('\u{b}'),
            '0' => cooked.push('\0'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                cooked.push(char_from_hex(&hex, 2).ok_or_else(invalid)?);
            }
            'u' => {
                let decoded = if chars.next_if_eq(&'{').is_some() {
                    let mut hex = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(digit) if digit.is_ascii_hexdigit() => hex.push(digit),
                            _ => return Err(invalid()),
                        }
                    }
                    char_from_hex(&hex, hex.len())
                } else {
                    let hex: String = chars.by_ref().take(4).collect();
                    char_from_hex(&hex, 4)
                };
                cooked.push(decoded.ok_or_else(invalid)?);
            }
            // Line continuation
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            other => cooked.push(other),
        }
    }
    Ok(cooked)
}

fn char_from_hex(hex: &str, expected_len: usize) -> Option<char> {
    if hex.is_empty() || hex.len() != expected_len || !hex.chars().all(|c| c.is_ascii_hexdigit())
    {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
