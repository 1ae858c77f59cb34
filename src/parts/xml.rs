//! Small event-writer wrapper shared by all part renderers.

use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Writer for one XML part.
///
/// Attribute values and text go through quick-xml, which escapes them.
pub(crate) struct PartWriter {
    writer: Writer<Vec<u8>>,
}

impl PartWriter {
    /// Start a part with a standalone UTF-8 declaration.
    pub(crate) fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::with_capacity(1024));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(write_error)?;
        Ok(Self { writer })
    }

    /// Write `<name attrs>`, the content produced by `inner`, then `</name>`.
    pub(crate) fn element<F>(&mut self, name: &str, attrs: &[(&str, &str)], inner: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.writer
            .write_event(Event::Start(start(name, attrs)))
            .map_err(write_error)?;
        inner(self)?;
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(write_error)
    }

    /// Write `<name attrs/>`.
    pub(crate) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Empty(start(name, attrs)))
            .map_err(write_error)
    }

    /// Write `<name attrs>text</name>`.
    pub(crate) fn text(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.element(name, attrs, |w| {
            w.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)
        })
    }

    /// Finish the part and return its text.
    pub(crate) fn finish(self) -> Result<String> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

fn start<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for &attr in attrs {
        elem.push_attribute(attr);
    }
    elem
}

fn write_error(err: impl std::fmt::Display) -> Error {
    Error::PackagingFailure(format!("XML write error: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_and_nesting() {
        let mut w = PartWriter::new().unwrap();
        w.element("root", &[("xmlns", "urn:test")], |w| {
            w.empty("child", &[("id", "1")])?;
            w.text("name", &[], "hello")
        })
        .unwrap();
        let xml = w.finish().unwrap();

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <root xmlns=\"urn:test\"><child id=\"1\"/><name>hello</name></root>"
        );
    }

    #[test]
    fn test_escaping() {
        let mut w = PartWriter::new().unwrap();
        w.element("root", &[("title", "a\"b<c")], |w| {
            w.text("t", &[], "Q&A <draft>")
        })
        .unwrap();
        let xml = w.finish().unwrap();

        assert!(xml.contains("title=\"a&quot;b&lt;c\""));
        assert!(xml.contains("<t>Q&amp;A &lt;draft"));
    }
}
