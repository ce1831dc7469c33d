//! Parsing flat translation text back into template shape
//!
//! Catalogs store translations as flat strings where every substitution is a
//! `{$name}` token. Parsing splits such a string into static parts and the
//! ordered list of names it references.

use crate::placeholder::escape_leading_marker;
use crate::template::{TemplatePart, TemplateStrings};

const TOKEN_OPEN: &str = "{$";
const TOKEN_CLOSE: char = '}';

/// A translation in template shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranslation {
    /// Static parts of the translated text
    pub strings: TemplateStrings,
    /// Placeholder names in the order the translation uses them
    pub placeholder_names: Vec<String>,
}

impl ParsedTranslation {
    /// Flatten back into `{$name}` text
    pub fn to_message_string(&self) -> String {
        let parts = self.strings.parts();
        let mut text = parts[0].cooked().to_string();
        for (name, part) in self.placeholder_names.iter().zip(&parts[1..]) {
            text.push_str(TOKEN_OPEN);
            text.push_str(name);
            text.push(TOKEN_CLOSE);
            text.push_str(part.cooked());
        }
        text
    }
}

/// Split `{$name}` translation text into parts and placeholder names
///
/// Never fails: an opening `{$` with no closing `}` is ordinary text. Parts
/// that begin with the placeholder-name marker get an escaped raw variant so
/// that assembly keeps them verbatim.
pub fn parse_translation(text: &str) -> ParsedTranslation {
    let mut cooked_parts = Vec::new();
    let mut placeholder_names = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(TOKEN_OPEN) {
        let after_open = &rest[open + TOKEN_OPEN.len()..];
        let Some(close) = after_open.find(TOKEN_CLOSE) else {
            break;
        };
        cooked_parts.push(&rest[..open]);
        placeholder_names.push(after_open[..close].to_string());
        rest = &after_open[close + TOKEN_CLOSE.len_utf8()..];
    }
    cooked_parts.push(rest);

    let parts = cooked_parts
        .into_iter()
        .map(|cooked| TemplatePart::new(cooked, escape_leading_marker(cooked)))
        .collect();

    ParsedTranslation {
        strings: TemplateStrings::from_parsed_parts(parts),
        placeholder_names,
    }
}
