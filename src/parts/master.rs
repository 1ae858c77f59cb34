//! Slide master and slide layout parts.
//!
//! A deck has exactly one master with one blank layout; neither carries
//! any shapes.

use super::relationships::Relationships;
use super::schema::{REL_SLIDE_LAYOUT, REL_SLIDE_MASTER, REL_THEME};
use super::slide::{presentationml_namespaces, shape_tree, write_master_color_mapping};
use super::xml::PartWriter;
use crate::error::Result;

/// ID of the single layout in the master's layout ID list.
pub const SLIDE_LAYOUT_ID: u32 = 2_147_483_649;

/// Relationship ID of the layout inside the master's .rels.
pub const MASTER_LAYOUT_REL_ID: &str = "rId1";

/// Relationship ID of the theme inside the master's .rels.
pub const MASTER_THEME_REL_ID: &str = "rId2";

/// Relationship ID of the master inside the layout's .rels.
pub const LAYOUT_MASTER_REL_ID: &str = "rId1";

/// Color mapping of the master: background to light, text to dark.
const COLOR_MAP: [(&str, &str); 12] = [
    ("bg1", "lt1"),
    ("tx1", "dk1"),
    ("bg2", "lt2"),
    ("tx2", "dk2"),
    ("accent1", "accent1"),
    ("accent2", "accent2"),
    ("accent3", "accent3"),
    ("accent4", "accent4"),
    ("accent5", "accent5"),
    ("accent6", "accent6"),
    ("hlink", "hlink"),
    ("folHlink", "folHlink"),
];

/// Render `ppt/slideMasters/slideMaster1.xml`.
pub fn slide_master_xml() -> Result<String> {
    let layout_id = SLIDE_LAYOUT_ID.to_string();

    let mut w = PartWriter::new()?;
    w.element("p:sldMaster", &presentationml_namespaces(), |w| {
        shape_tree(w, &[], |_| Ok(()))?;
        w.empty("p:clrMap", &COLOR_MAP)?;
        w.element("p:sldLayoutIdLst", &[], |w| {
            w.empty(
                "p:sldLayoutId",
                &[("id", layout_id.as_str()), ("r:id", MASTER_LAYOUT_REL_ID)],
            )
        })
    })?;
    w.finish()
}

/// Relationships of the slide master: its layout and the theme.
pub fn slide_master_relationships() -> Result<Relationships> {
    Relationships::new()
        .with(
            MASTER_LAYOUT_REL_ID,
            REL_SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
        )?
        .with(MASTER_THEME_REL_ID, REL_THEME, "../theme/theme1.xml")
}

/// Render `ppt/slideLayouts/slideLayout1.xml`, a blank layout.
pub fn slide_layout_xml() -> Result<String> {
    let mut attrs = presentationml_namespaces().to_vec();
    attrs.push(("type", "blank"));
    attrs.push(("preserve", "1"));

    let mut w = PartWriter::new()?;
    w.element("p:sldLayout", &attrs, |w| {
        shape_tree(w, &[("name", "Blank")], |_| Ok(()))?;
        write_master_color_mapping(w)
    })?;
    w.finish()
}

/// Relationships of the slide layout: back to the master.
pub fn slide_layout_relationships() -> Result<Relationships> {
    Relationships::new().with(
        LAYOUT_MASTER_REL_ID,
        REL_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )
}
