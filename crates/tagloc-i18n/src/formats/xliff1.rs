//! XLIFF 1.2 catalogs
//!
//! Placeholders appear as empty `<x id="NAME"/>` elements inside `<source>`
//! and `<target>`. Parsing turns them back into `{$NAME}` tokens.

use super::{unique_by_id, TranslationFormat};
use crate::error::{LocalizeError, LocalizeResult};
use crate::locale::Locale;
use crate::message::SourceMessage;
use crate::store::TranslationStore;
use std::io;
use tracing::{debug, warn};
use xml::attribute::OwnedAttribute;
use xml::common::XmlVersion;
use xml::reader::{EventReader, ParserConfig, XmlEvent};
use xml::writer::{EmitterConfig, EventWriter, XmlEvent as WriterEvent};

const FORMAT_NAME: &str = "xliff";
const LEGACY_ID_LENGTH: usize = 40;
const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

type Reader<'a> = EventReader<&'a [u8]>;
type Writer = EventWriter<Vec<u8>>;

/// XLIFF 1.2 catalog format
#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff1Format {
    use_legacy_ids: bool,
}

impl Xliff1Format {
    /// Create the format; with `use_legacy_ids` set, serialized trans-units
    /// are keyed by each message's 40-character legacy id when it has one
    pub const fn new(use_legacy_ids: bool) -> Self {
        Self { use_legacy_ids }
    }

    fn message_id<'a>(&self, message: &'a SourceMessage) -> &'a str {
        if self.use_legacy_ids {
            if let Some(legacy) = message.legacy_ids.iter().find(|id| is_legacy_id(id)) {
                return legacy;
            }
        }
        &message.id
    }
}

impl TranslationFormat for Xliff1Format {
    fn name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn parse(&self, contents: &str) -> LocalizeResult<TranslationStore> {
        let mut reader = ParserConfig::new()
            .whitespace_to_characters(true)
            .cdata_to_characters(true)
            .ignore_comments(true)
            .create_reader(contents.as_bytes());
        let mut store = TranslationStore::new();

        loop {
            match reader.next()? {
                XmlEvent::StartElement {
                    name, attributes, ..
                } => match name.local_name.as_str() {
                    "file" => {
                        if let Some(language) = attribute(&attributes, "target-language") {
                            store.set_locale(Locale::parse(language)?);
                        }
                    }
                    "trans-unit" => {
                        let id = attribute(&attributes, "id")
                            .ok_or_else(|| parse_error("<trans-unit> is missing an id"))?
                            .to_string();
                        let text = read_trans_unit(&mut reader, &id)?;
                        if store.contains(&id) {
                            return Err(LocalizeError::DuplicateTranslation { id });
                        }
                        store.insert_text(id, &text);
                    }
                    _ => {}
                },
                XmlEvent::EndDocument => break,
                _ => {}
            }
        }

        debug!(
            "Parsed XLIFF catalog with {} translations for locale {:?}",
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
        let source_language = source_locale.to_string();
        let mut writer = EmitterConfig::new()
            .perform_indent(true)
            .create_writer(Vec::new());

        writer.write(WriterEvent::StartDocument {
            version: XmlVersion::Version10,
            encoding: Some("UTF-8"),
            standalone: None,
        })?;
        writer.write(
            WriterEvent::start_element("xliff")
                .attr("version", "1.2")
                .default_ns(XLIFF_NAMESPACE),
        )?;
        writer.write(
            WriterEvent::start_element("file")
                .attr("source-language", &source_language)
                .attr("datatype", "plaintext")
                .attr("original", "ng2.template"),
        )?;
        writer.write(WriterEvent::start_element("body"))?;

        for (id, message) in unique_by_id(messages, |message| self.message_id(message)) {
            writer.write(
                WriterEvent::start_element("trans-unit")
                    .attr("id", id)
                    .attr("datatype", "html"),
            )?;
            write_source(&mut writer, message)?;
            if let Some(description) = &message.description {
                write_note(&mut writer, "description", description)?;
            }
            if let Some(meaning) = &message.meaning {
                write_note(&mut writer, "meaning", meaning)?;
            }
            writer.write(WriterEvent::end_element())?;
        }

        // body, file, xliff
        for _ in 0..3 {
            writer.write(WriterEvent::end_element())?;
        }

        let mut output = String::from_utf8(writer.into_inner())
            .map_err(|err| LocalizeError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        output.push('\n');
        Ok(output)
    }
}

fn is_legacy_id(id: &str) -> bool {
    id.len() == LEGACY_ID_LENGTH && id.chars().all(|c| c.is_ascii_hexdigit())
}

fn parse_error(message: impl Into<String>) -> LocalizeError {
    LocalizeError::CatalogParse {
        format: FORMAT_NAME,
        message: message.into(),
    }
}

fn attribute<'a>(attributes: &'a [OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name.prefix.is_none() && attr.name.local_name == name)
        .map(|attr| attr.value.as_str())
}

// Inside an element an EndDocument can only mean truncated input.
fn next_event(reader: &mut Reader<'_>) -> LocalizeResult<XmlEvent> {
    match reader.next()? {
        XmlEvent::EndDocument => Err(parse_error("Unexpected end of document")),
        event => Ok(event),
    }
}

fn skip_element(reader: &mut Reader<'_>) -> LocalizeResult<()> {
    loop {
        match next_event(reader)? {
            XmlEvent::StartElement { .. } => skip_element(reader)?,
            XmlEvent::EndElement { .. } => return Ok(()),
            _ => {}
        }
    }
}

/// Read a `<trans-unit>` body, returning its target text or, failing that,
/// its source text
fn read_trans_unit(reader: &mut Reader<'_>, id: &str) -> LocalizeResult<String> {
    let mut source = None;
    let mut target = None;

    loop {
        match next_event(reader)? {
            XmlEvent::StartElement { name, .. } => match name.local_name.as_str() {
                "source" => source = Some(read_message_text(reader)?),
                "target" => target = Some(read_message_text(reader)?),
                _ => skip_element(reader)?,
            },
            XmlEvent::EndElement { .. } => break,
            _ => {}
        }
    }

    match (target, source) {
        (Some(target), _) => Ok(target),
        (None, Some(source)) => {
            warn!("Trans-unit {:?} has no <target>, using its <source>", id);
            Ok(source)
        }
        (None, None) => Err(parse_error(format!(
            "<trans-unit id=\"{id}\"> has neither <target> nor <source>"
        ))),
    }
}

/// Collect message text up to the closing tag, turning `<x id>` into `{$id}`
fn read_message_text(reader: &mut Reader<'_>) -> LocalizeResult<String> {
    let mut text = String::new();
    loop {
        match next_event(reader)? {
            XmlEvent::Characters(characters) => text.push_str(&characters),
            XmlEvent::StartElement {
                name, attributes, ..
            } if name.local_name == "x" => {
                let id = attribute(&attributes, "id")
                    .ok_or_else(|| parse_error("<x> placeholder is missing an id"))?;
                text.push_str("{$");
                text.push_str(id);
                text.push('}');
                skip_element(reader)?;
            }
            // Inline markup such as <g> contributes its text only
            XmlEvent::StartElement { .. } => text.push_str(&read_message_text(reader)?),
            XmlEvent::EndElement { .. } => return Ok(text),
            _ => {}
        }
    }
}

/// Write `<source>` with `<x id>` placeholders between the text parts
///
/// Every part is written as text, even when empty, so the emitter never
/// indents inside the element.
fn write_source(writer: &mut Writer, message: &SourceMessage) -> LocalizeResult<()> {
    writer.write(WriterEvent::start_element("source"))?;
    match message.message_parts.split_first() {
        Some((head, tail)) => {
            writer.write(WriterEvent::characters(head))?;
            for (name, part) in message.placeholder_names.iter().zip(tail) {
                writer.write(WriterEvent::start_element("x").attr("id", name))?;
                writer.write(WriterEvent::end_element())?;
                writer.write(WriterEvent::characters(part))?;
            }
        }
        None => writer.write(WriterEvent::characters(&message.text))?,
    }
    writer.write(WriterEvent::end_element())?;
    Ok(())
}

fn write_note(writer: &mut Writer, from: &str, text: &str) -> LocalizeResult<()> {
    writer.write(
        WriterEvent::start_element("note")
            .attr("priority", "1")
            .attr("from", from),
    )?;
    writer.write(WriterEvent::characters(text))?;
    writer.write(WriterEvent::end_element())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagloc_common::test_utils::catalog_fixtures;

    fn wrap(units: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file source-language="en" target-language="es" datatype="plaintext">
    <body>{units}</body>
  </file>
</xliff>"#
        )
    }

    fn source(id: &str, parts: &[&str], names: &[&str]) -> SourceMessage {
        SourceMessage {
            id: id.to_string(),
            text: String::new(),
            meaning: None,
            description: None,
            legacy_ids: Vec::new(),
            message_parts: parts.iter().map(ToString::to_string).collect(),
            placeholder_names: names.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_parse_fixture() {
        let store = Xliff1Format::default()
            .parse(catalog_fixtures::german_xliff())
            .unwrap();

        assert_eq!(store.locale().unwrap().to_string(), "de");
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get("greeting").unwrap().to_message_string(),
            "Hallo {$name}!"
        );
        assert_eq!(store.get("pair").unwrap().placeholder_names, vec!["1", "0"]);
        assert_eq!(
            store.get("plain").unwrap().to_message_string(),
            "Auf Wiedersehen"
        );
    }

    #[test]
    fn test_parse_source_fallback_and_inline_markup() {
        let contents = wrap(
            r#"<trans-unit id="a"><source>Only <g id="b">bold</g> &amp; <x id="n"/></source></trans-unit>"#,
        );
        let store = Xliff1Format::default().parse(&contents).unwrap();
        assert_eq!(store.get("a").unwrap().to_message_string(), "Only bold & {$n}");
    }

    #[test]
    fn test_parse_keeps_whitespace_between_placeholders() {
        let contents = wrap(
            r#"<trans-unit id="a"><source/><target><x id="0"/> <x id="1"/></target></trans-unit>"#,
        );
        let store = Xliff1Format::default().parse(&contents).unwrap();
        assert_eq!(store.get("a").unwrap().to_message_string(), "{$0} {$1}");
    }

    #[test]
    fn test_parse_errors() {
        let format = Xliff1Format::default();

        let duplicate = wrap(
            r#"<trans-unit id="a"><target>x</target></trans-unit><trans-unit id="a"><target>y</target></trans-unit>"#,
        );
        assert!(matches!(
            format.parse(&duplicate),
            Err(LocalizeError::DuplicateTranslation { id }) if id == "a"
        ));

        let missing_id = wrap("<trans-unit><target>x</target></trans-unit>");
        assert!(matches!(
            format.parse(&missing_id),
            Err(LocalizeError::CatalogParse { format: "xliff", .. })
        ));

        let empty_unit = wrap(r#"<trans-unit id="a"><note>n</note></trans-unit>"#);
        assert!(matches!(
            format.parse(&empty_unit),
            Err(LocalizeError::CatalogParse { .. })
        ));

        assert!(matches!(
            format.parse("<xliff><file></xliff>"),
            Err(LocalizeError::Xml(_))
        ));
    }

    #[test]
    fn test_serialize() {
        let mut message = source("greeting", &["Hello ", " & welcome"], &["name"]);
        message.description = Some("Home <page".to_string());
        message.meaning = Some("salutation".to_string());

        let output = Xliff1Format::default()
            .serialize(&Locale::parse("en").unwrap(), &[message])
            .unwrap();

        assert!(output.contains(r#"<file source-language="en" datatype="plaintext""#));
        assert!(output.contains(r#"<trans-unit id="greeting" datatype="html">"#));
        assert!(output.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(output.contains(r#"<source>Hello <x id="name" /> &amp; welcome</source>"#));
        assert!(output.contains(r#"<note priority="1" from="description">Home &lt;page</note>"#));
        assert!(output.contains(r#"<note priority="1" from="meaning">salutation</note>"#));
    }

    #[test]
    fn test_serialize_with_legacy_ids() {
        let legacy = "0123456789abcdef0123456789abcdef01234567";
        let mut message = source("new-id", &["Hi"], &[]);
        message.legacy_ids = vec!["short".to_string(), legacy.to_string()];
        let plain = source("other", &["Bye"], &[]);
        let locale = Locale::parse("en").unwrap();

        let output = Xliff1Format::new(true)
            .serialize(&locale, &[message.clone(), plain.clone()])
            .unwrap();
        assert!(output.contains(&format!(r#"<trans-unit id="{legacy}""#)));
        assert!(output.contains(r#"<trans-unit id="other""#));

        let output = Xliff1Format::new(false)
            .serialize(&locale, &[message, plain])
            .unwrap();
        assert!(output.contains(r#"<trans-unit id="new-id""#));
    }

    #[test]
    fn test_serialized_catalog_parses_back_to_source_text() {
        let message = source("m", &["", " of ", ""], &["count", "total"]);
        let format = Xliff1Format::default();
        let output = format
            .serialize(&Locale::parse("en").unwrap(), &[message])
            .unwrap();
        assert!(output.contains(r#"<source><x id="count" /> of <x id="total" /></source>"#));

        let store = format.parse(&output).unwrap();
        assert!(store.locale().is_none());
        assert_eq!(
            store.get("m").unwrap().to_message_string(),
            "{$count} of {$total}"
        );
    }
}
