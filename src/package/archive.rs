//! Archive entries, reference checking and ZIP output.

use crate::error::{Error, Result};
use crate::naming::{rels_path_for, resolve_target};
use crate::parts::schema::CONTENT_TYPES_PATH;
use crate::parts::{ContentTypes, Relationships};
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One file in the package.
#[derive(Debug, Clone)]
pub(crate) struct PackageEntry<'a> {
    /// Archive path (no leading `/`)
    pub path: String,
    /// File contents
    pub data: Cow<'a, [u8]>,
}

/// A relationship target, resolved to an archive path.
#[derive(Debug, Clone)]
struct Reference {
    rels_path: String,
    target: String,
}

/// Accumulates the entries of one package before anything is written.
///
/// Page images are borrowed from the caller, not copied.
#[derive(Debug, Default)]
pub(crate) struct PackageContents<'a> {
    entries: Vec<PackageEntry<'a>>,
    paths: HashSet<String>,
    references: Vec<Reference>,
    content_types: Option<ContentTypes>,
}

impl<'a> PackageContents<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a file. Paths must be unique.
    pub(crate) fn add(&mut self, path: impl Into<String>, data: impl Into<Cow<'a, [u8]>>) -> Result<()> {
        let path = path.into();
        if !self.paths.insert(path.clone()) {
            return Err(Error::PackagingFailure(format!("duplicate part {}", path)));
        }
        self.entries.push(PackageEntry {
            path,
            data: data.into(),
        });
        Ok(())
    }

    /// Add a rendered XML part.
    pub(crate) fn add_xml(&mut self, path: impl Into<String>, xml: String) -> Result<()> {
        self.add(path, xml.into_bytes())
    }

    /// Add the relationship file of `source_part` ("" for the package).
    pub(crate) fn add_relationships(&mut self, source_part: &str, rels: &Relationships) -> Result<()> {
        let rels_path = rels_path_for(source_part);
        for rel in rels.iter() {
            self.references.push(Reference {
                rels_path: rels_path.clone(),
                target: resolve_target(source_part, &rel.target),
            });
        }
        self.add_xml(rels_path, rels.to_xml()?)
    }

    /// Add the content-type manifest.
    pub(crate) fn add_content_types(&mut self, types: ContentTypes) -> Result<()> {
        self.add_xml(CONTENT_TYPES_PATH, types.to_xml()?)?;
        self.content_types = Some(types);
        Ok(())
    }

    /// All entries in insertion order.
    pub(crate) fn entries(&self) -> &[PackageEntry<'a>] {
        &self.entries
    }

    /// Check that the package is self-consistent:
    /// every relationship target and override names an entry, every XML
    /// part has an explicit content type, and every part other than the
    /// manifest and relationship files is the target of a relationship.
    pub(crate) fn verify(&self) -> Result<()> {
        let types = self
            .content_types
            .as_ref()
            .ok_or_else(|| Error::PackagingFailure("missing [Content_Types].xml".to_string()))?;

        for reference in &self.references {
            if !self.paths.contains(&reference.target) {
                return Err(Error::PackagingFailure(format!(
                    "{} references missing part {}",
                    reference.rels_path, reference.target
                )));
            }
        }

        for o in &types.overrides {
            let path = o.part_name.trim_start_matches('/');
            if !self.paths.contains(path) {
                return Err(Error::PackagingFailure(format!(
                    "content type override for missing part {}",
                    o.part_name
                )));
            }
        }

        let targeted: HashSet<&str> = self.references.iter().map(|r| r.target.as_str()).collect();
        let overridden: HashSet<&str> = types
            .overrides
            .iter()
            .map(|o| o.part_name.trim_start_matches('/'))
            .collect();

        for entry in &self.entries {
            let path = entry.path.as_str();
            if path == CONTENT_TYPES_PATH || path.ends_with(".rels") {
                continue;
            }
            if path.ends_with(".xml") {
                if !overridden.contains(path) {
                    return Err(Error::PackagingFailure(format!(
                        "no content type override for {}",
                        path
                    )));
                }
            } else if types.content_type_of(path).is_none() {
                return Err(Error::PackagingFailure(format!("no content type for {}", path)));
            }
            if !targeted.contains(path) {
                return Err(Error::PackagingFailure(format!(
                    "{} is not referenced by any relationship",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Write every entry into a Deflate-compressed ZIP archive.
    ///
    /// Timestamps are fixed so identical input gives identical bytes.
    pub(crate) fn write_zip(&self, compression_level: Option<i64>) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(compression_level)
            .last_modified_time(zip::DateTime::default());

        for entry in &self.entries {
            zip.start_file(entry.path.as_str(), options)?;
            zip.write_all(&entry.data)
                .map_err(|e| Error::PackagingFailure(format!("writing {}: {}", entry.path, e)))?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::schema::{CT_SLIDE, REL_IMAGE, REL_OFFICE_DOCUMENT};
    use std::io::Read;

    fn minimal() -> PackageContents<'static> {
        let mut types = ContentTypes::default();
        types.add_default("rels", "application/vnd.openxmlformats-package.relationships+xml");
        types.add_default("png", "image/png");
        types.add_override("doc.xml", CT_SLIDE);

        let mut contents = PackageContents::new();
        contents.add_content_types(types).unwrap();
        contents
            .add_relationships(
                "",
                &Relationships::new()
                    .with("rId1", REL_OFFICE_DOCUMENT, "doc.xml")
                    .unwrap(),
            )
            .unwrap();
        contents.add_xml("doc.xml", "<doc/>".to_string()).unwrap();
        contents
    }

    #[test]
    fn test_verify_minimal() {
        assert!(minimal().verify().is_ok());
    }

    #[test]
    fn test_duplicate_path() {
        let mut contents = minimal();
        let result = contents.add_xml("doc.xml", "<again/>".to_string());
        assert!(matches!(result, Err(Error::PackagingFailure(_))));
    }

    #[test]
    fn test_dangling_reference() {
        let mut contents = minimal();
        contents
            .add_relationships(
                "doc.xml",
                &Relationships::new()
                    .with("rId1", REL_IMAGE, "media/missing.png")
                    .unwrap(),
            )
            .unwrap();
        let err = contents.verify().unwrap_err();
        assert!(err.to_string().contains("media/missing.png"));
    }

    #[test]
    fn test_orphan_entry() {
        let mut contents = minimal();
        contents.add("media/stray.png", &b"png"[..]).unwrap();
        let err = contents.verify().unwrap_err();
        assert!(err.to_string().contains("not referenced"));
    }

    #[test]
    fn test_verify_many_parts() {
        let mut contents = minimal();
        let mut types = ContentTypes::default();
        types.add_default("rels", "application/vnd.openxmlformats-package.relationships+xml");
        types.add_override("doc.xml", CT_SLIDE);

        let mut rels = Relationships::new();
        for n in 1..=5_000 {
            let part = format!("part{}.xml", n);
            types.add_override(&part, CT_SLIDE);
            rels.add(format!("rId{}", n), REL_IMAGE, part.as_str()).unwrap();
            contents.add_xml(part, "<p/>".to_string()).unwrap();
        }
        contents.add_relationships("doc.xml", &rels).unwrap();
        contents.content_types = Some(types);

        assert!(contents.verify().is_ok());
    }

    #[test]
    fn test_xml_part_needs_override() {
        let mut contents = minimal();
        contents
            .add_relationships(
                "doc.xml",
                &Relationships::new()
                    .with("rId1", REL_IMAGE, "extra.xml")
                    .unwrap(),
            )
            .unwrap();
        contents.add_xml("extra.xml", "<x/>".to_string()).unwrap();
        let err = contents.verify().unwrap_err();
        assert!(err.to_string().contains("no content type override for extra.xml"));
    }

    #[test]
    fn test_write_zip() {
        let contents = minimal();
        let bytes = contents.write_zip(Some(6)).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), contents.entries().len());

        let mut doc = archive.by_name("doc.xml").unwrap();
        assert_eq!(doc.compression(), CompressionMethod::Deflated);
        let mut text = String::new();
        doc.read_to_string(&mut text).unwrap();
        assert_eq!(text, "<doc/>");
    }

    #[test]
    fn test_write_zip_is_deterministic() {
        let a = minimal().write_zip(Some(6)).unwrap();
        let b = minimal().write_zip(Some(6)).unwrap();
        assert_eq!(a, b);
    }
}
