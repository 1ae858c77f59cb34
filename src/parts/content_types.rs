//! The `[Content_Types].xml` manifest.

use super::schema::*;
use super::xml::PartWriter;
use crate::error::Result;

/// Content type for every part with a given extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultType {
    /// Extension without the dot (e.g., "png")
    pub extension: String,
    /// MIME type
    pub content_type: String,
}

/// Content type of one specific part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideType {
    /// Absolute part name (e.g., "/ppt/slides/slide1.xml")
    pub part_name: String,
    /// MIME type
    pub content_type: String,
}

/// Package content-type manifest.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    pub defaults: Vec<DefaultType>,
    pub overrides: Vec<OverrideType>,
}

impl ContentTypes {
    /// Manifest with the `rels`, `xml` and `png` defaults and the overrides
    /// for the fixed presentation parts.
    pub fn presentation() -> Self {
        let mut types = Self::default();
        types.add_default("rels", CT_RELATIONSHIPS);
        types.add_default("xml", CT_XML);
        types.add_default("png", CT_PNG);
        types.add_override(PRESENTATION_PATH, CT_PRESENTATION);
        types.add_override(SLIDE_MASTER_PATH, CT_SLIDE_MASTER);
        types.add_override(SLIDE_LAYOUT_PATH, CT_SLIDE_LAYOUT);
        types.add_override(THEME_PATH, CT_THEME);
        types
    }

    /// Register a default extension mapping.
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults.push(DefaultType {
            extension: extension.to_string(),
            content_type: content_type.to_string(),
        });
    }

    /// Register an override for an archive path (with or without a leading `/`).
    pub fn add_override(&mut self, path: &str, content_type: &str) {
        let part_name = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        self.overrides.push(OverrideType {
            part_name,
            content_type: content_type.to_string(),
        });
    }

    /// Content type that applies to an archive path, if any.
    pub fn content_type_of(&self, path: &str) -> Option<&str> {
        let path = path.trim_start_matches('/');
        if let Some(o) = self
            .overrides
            .iter()
            .find(|o| o.part_name.trim_start_matches('/') == path)
        {
            return Some(&o.content_type);
        }
        let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
        self.defaults
            .iter()
            .find(|d| d.extension.eq_ignore_ascii_case(ext))
            .map(|d| d.content_type.as_str())
    }

    /// Render the manifest.
    pub fn to_xml(&self) -> Result<String> {
        let mut w = PartWriter::new()?;
        w.element("Types", &[("xmlns", NS_CONTENT_TYPES)], |w| {
            for d in &self.defaults {
                w.empty(
                    "Default",
                    &[
                        ("Extension", d.extension.as_str()),
                        ("ContentType", d.content_type.as_str()),
                    ],
                )?;
            }
            for o in &self.overrides {
                w.empty(
                    "Override",
                    &[
                        ("PartName", o.part_name.as_str()),
                        ("ContentType", o.content_type.as_str()),
                    ],
                )?;
            }
            Ok(())
        })?;
        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::slide_path;

    #[test]
    fn test_fixed_overrides() {
        let types = ContentTypes::presentation();
        assert_eq!(types.defaults.len(), 3);
        assert_eq!(types.overrides.len(), 4);
        assert_eq!(types.content_type_of(PRESENTATION_PATH), Some(CT_PRESENTATION));
        assert_eq!(types.content_type_of("ppt/media/image9.png"), Some(CT_PNG));
        assert_eq!(types.content_type_of("_rels/.rels"), Some(CT_RELATIONSHIPS));
        assert_eq!(types.content_type_of("ppt/media/image9.gif"), None);
    }

    #[test]
    fn test_slide_override() {
        let mut types = ContentTypes::presentation();
        types.add_override(&slide_path(2), CT_SLIDE);
        assert_eq!(types.overrides.last().unwrap().part_name, "/ppt/slides/slide2.xml");
        assert_eq!(types.content_type_of("ppt/slides/slide2.xml"), Some(CT_SLIDE));
    }

    #[test]
    fn test_to_xml() {
        let xml = ContentTypes::presentation().to_xml().unwrap();
        assert!(xml.contains(&format!("<Types xmlns=\"{}\">", NS_CONTENT_TYPES)));
        assert!(xml.contains(&format!(
            "<Default Extension=\"png\" ContentType=\"{}\"/>",
            CT_PNG
        )));
        assert!(xml.contains(&format!(
            "<Override PartName=\"/ppt/theme/theme1.xml\" ContentType=\"{}\"/>",
            CT_THEME
        )));
    }
}
