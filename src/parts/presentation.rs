//! The presentation root part (`ppt/presentation.xml`).

use super::schema::{NS_DRAWINGML, NS_OFFICE_RELS, NS_PRESENTATIONML};
use super::xml::PartWriter;
use crate::error::Result;
use crate::layout::Canvas;

/// ID of the single slide master in the master ID list.
pub const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// One entry of the slide ID list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideReference {
    /// Slide ID (256 and up)
    pub id: u32,
    /// Relationship ID in `ppt/_rels/presentation.xml.rels`
    pub rel_id: String,
}

/// The presentation root: master, ordered slides and slide size.
#[derive(Debug, Clone)]
pub struct PresentationPart {
    pub master_rel_id: String,
    pub slides: Vec<SlideReference>,
    pub canvas: Canvas,
}

impl PresentationPart {
    /// Render `ppt/presentation.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let width = self.canvas.width.to_string();
        let height = self.canvas.height.to_string();
        let master_id = SLIDE_MASTER_ID.to_string();

        let mut w = PartWriter::new()?;
        w.element(
            "p:presentation",
            &[
                ("xmlns:a", NS_DRAWINGML),
                ("xmlns:r", NS_OFFICE_RELS),
                ("xmlns:p", NS_PRESENTATIONML),
                ("saveSubsetFonts", "1"),
            ],
            |w| {
                w.element("p:sldMasterIdLst", &[], |w| {
                    w.empty(
                        "p:sldMasterId",
                        &[
                            ("id", master_id.as_str()),
                            ("r:id", self.master_rel_id.as_str()),
                        ],
                    )
                })?;
                w.element("p:sldIdLst", &[], |w| {
                    for slide in &self.slides {
                        let id = slide.id.to_string();
                        w.empty(
                            "p:sldId",
                            &[("id", id.as_str()), ("r:id", slide.rel_id.as_str())],
                        )?;
                    }
                    Ok(())
                })?;
                w.empty(
                    "p:sldSz",
                    &[
                        ("cx", width.as_str()),
                        ("cy", height.as_str()),
                        ("type", "screen4x3"),
                    ],
                )?;
                // Notes pages are portrait: the slide size rotated.
                w.empty(
                    "p:notesSz",
                    &[("cx", height.as_str()), ("cy", width.as_str())],
                )
            },
        )?;
        w.finish()
    }
}
