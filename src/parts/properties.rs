//! Document property parts under `docProps/`.

use super::schema::{NS_CORE_PROPERTIES, NS_DC, NS_EXTENDED_PROPERTIES};
use super::xml::PartWriter;
use crate::error::Result;

/// Application name recorded in `docProps/app.xml`.
pub const APPLICATION_NAME: &str = "pagedeck";

/// Title and author of a deck (`docProps/core.xml`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    /// Deck title
    pub title: Option<String>,
    /// Author
    pub creator: Option<String>,
}

impl DocumentProperties {
    /// Create empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Render `docProps/core.xml`.
    pub fn to_core_xml(&self) -> Result<String> {
        let mut w = PartWriter::new()?;
        w.element(
            "cp:coreProperties",
            &[("xmlns:cp", NS_CORE_PROPERTIES), ("xmlns:dc", NS_DC)],
            |w| {
                if let Some(title) = &self.title {
                    w.text("dc:title", &[], title)?;
                }
                if let Some(creator) = &self.creator {
                    w.text("dc:creator", &[], creator)?;
                }
                Ok(())
            },
        )?;
        w.finish()
    }
}

/// Render `docProps/app.xml` for a deck of `slides` slides.
pub fn app_properties_xml(slides: usize) -> Result<String> {
    let slides = slides.to_string();
    let mut w = PartWriter::new()?;
    w.element("Properties", &[("xmlns", NS_EXTENDED_PROPERTIES)], |w| {
        w.text("Application", &[], APPLICATION_NAME)?;
        w.text("PresentationFormat", &[], "On-screen Show (4:3)")?;
        w.text("Slides", &[], &slides)
    })?;
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_properties() {
        let props = DocumentProperties::new()
            .with_title("Q3 Review")
            .with_creator("Finance");
        let xml = props.to_core_xml().unwrap();
        assert!(xml.contains("<dc:title>Q3 Review</dc:title>"));
        assert!(xml.contains("<dc:creator>Finance</dc:creator>"));
    }

    #[test]
    fn test_core_properties_are_escaped() {
        let props = DocumentProperties::new().with_title("R&D <final> \"v2\"");
        let xml = props.to_core_xml().unwrap();
        assert!(xml.contains("R&amp;D &lt;final"));
        assert!(!xml.contains("<final>"));
    }

    #[test]
    fn test_empty_core_properties() {
        let xml = DocumentProperties::default().to_core_xml().unwrap();
        assert!(!xml.contains("dc:title>"));
        assert!(xml.ends_with("</cp:coreProperties>"));
    }

    #[test]
    fn test_app_properties() {
        let xml = app_properties_xml(12).unwrap();
        assert!(xml.contains("<Application>pagedeck</Application>"));
        assert!(xml.contains("<Slides>12</Slides>"));
    }
}
