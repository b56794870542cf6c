//! Markup-element field source.
//!
//! Many tools emit metadata as a single markup element whose attributes
//! carry all fields, far more of them than any one consumer reads. This
//! module turns such an element into a [`FieldSource`].

use std::path::Path;

use log::trace;
use quick_xml::{events::Event, Reader};

use super::error::Result;
use super::source::FieldSource;

/// A field source backed by one markup element's attribute list.
#[derive(Debug, Clone)]
pub struct MarkupSource {
    text: String,
}

impl MarkupSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Loads the element text from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            text: std::fs::read_to_string(path)?,
        })
    }
}

impl FieldSource for MarkupSource {
    fn fields(self) -> std::result::Result<Vec<(String, String)>, String> {
        // Tool-emitted headers occasionally carry stray control characters;
        // strip them before handing the text to the parser.
        let sanitized: String = self
            .text
            .chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect();
        parse_attributes(&sanitized)
    }
}

/// Extracts all attributes from the root element, in document order.
fn parse_attributes(text: &str) -> std::result::Result<Vec<(String, String)>, String> {
    let mut reader = Reader::from_str(text);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                trace!("root element: {}", String::from_utf8_lossy(e.name().as_ref()));
                return e
                    .attributes()
                    .map(|attr_result| {
                        let attr = attr_result
                            .map_err(|e| format!("bad attribute syntax: {}", e))?;
                        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                        let value = attr
                            .unescape_value()
                            .map_err(|e| format!("bad attribute value: {}", e))?
                            .into_owned();
                        Ok((name, value))
                    })
                    .collect();
            }
            Ok(Event::Eof) => return Err("no root element found".to_string()),
            Err(e) => return Err(format!("unreadable markup: {}", e)),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_come_back_in_document_order() {
        let source = MarkupSource::new(r#"<Backup count="162" type="full"/>"#);
        let fields = source.fields().expect("well-formed element");
        assert_eq!(
            fields,
            vec![
                ("count".to_string(), "162".to_string()),
                ("type".to_string(), "full".to_string()),
            ]
        );
    }

    #[test]
    fn entity_references_are_unescaped() {
        let source = MarkupSource::new(r#"<Meta title="a &amp; b"/>"#);
        let fields = source.fields().expect("well-formed element");
        assert_eq!(fields[0].1, "a & b");
    }

    #[test]
    fn leading_whitespace_and_declaration_are_skipped() {
        let source = MarkupSource::new("\n  <?xml version=\"1.0\"?>\n<Meta k=\"v\"/>");
        let fields = source.fields().expect("well-formed element");
        assert_eq!(fields, vec![("k".to_string(), "v".to_string())]);
    }

    #[test]
    fn empty_text_reports_missing_root() {
        let source = MarkupSource::new("   ");
        let reason = source.fields().expect_err("no element present");
        assert!(reason.contains("no root element"));
    }

    #[test]
    fn broken_attribute_syntax_is_reported() {
        let source = MarkupSource::new(r#"<Meta k="v"#);
        assert!(source.fields().is_err());
    }
}
