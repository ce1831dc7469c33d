//! Placeholder-name annotations inside static template text
//!
//! A static part that directly follows a substitution may open with a
//! placeholder name wrapped in markers, `:itemCount: items`. The annotation is
//! never rendered. A literal leading marker has to be escaped in source
//! (`\:`), which only the raw text still shows.
//!
//! Synthesized templates have no raw text. Their parts are inspected through
//! the cooked text instead, on the assumption that such templates always name
//! their placeholders explicitly and so never need the escape.

use crate::template::TemplatePart;

/// Character that opens and closes a placeholder-name annotation
pub const PLACEHOLDER_NAME_MARKER: char = ':';

/// Split a cooked part into its placeholder name (if annotated) and the
/// remaining text
///
/// `raw` decides whether the part is annotated; an empty `raw` falls back to
/// `cooked`. An annotation without a closing marker is treated as plain text.
pub fn split_placeholder_name<'a>(cooked: &'a str, raw: &str) -> (Option<&'a str>, &'a str) {
    let marked = if raw.is_empty() { cooked } else { raw };
    if !marked.starts_with(PLACEHOLDER_NAME_MARKER) {
        return (None, cooked);
    }
    let Some(rest) = cooked.strip_prefix(PLACEHOLDER_NAME_MARKER) else {
        return (None, cooked);
    };
    match rest.find(PLACEHOLDER_NAME_MARKER) {
        Some(end) => (
            Some(&rest[..end]),
            &rest[end + PLACEHOLDER_NAME_MARKER.len_utf8()..],
        ),
        None => (None, cooked),
    }
}

/// Remove a leading placeholder-name annotation from a cooked part
pub fn strip_placeholder_name<'a>(cooked: &'a str, raw: &str) -> &'a str {
    split_placeholder_name(cooked, raw).1
}

/// Name the substitution slot preceding `part`
///
/// `index` is the 0-based ordinal of that slot; it becomes the name when the
/// part carries no annotation. Returns the name and the stripped text.
pub fn derive_placeholder_name(part: &TemplatePart, index: usize) -> (String, &str) {
    match split_placeholder_name(part.cooked(), part.raw()) {
        (Some(name), text) => (name.to_string(), text),
        (None, text) => (index.to_string(), text),
    }
}

/// Build the raw variant of decoded text so a leading marker stays literal
pub fn escape_leading_marker(text: &str) -> String {
    if text.starts_with(PLACEHOLDER_NAME_MARKER) {
        format!("\\{text}")
    } else {
        text.to_string()
    }
}
