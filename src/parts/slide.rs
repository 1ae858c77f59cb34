//! Slide parts and the shape tree they share with the master and layout.

use super::schema::{NS_DRAWINGML, NS_OFFICE_RELS, NS_PRESENTATIONML};
use super::xml::PartWriter;
use crate::error::Result;
use crate::layout::SlidePlacement;

/// A slide holding one picture.
#[derive(Debug, Clone)]
pub struct SlidePart {
    /// 1-based slide number, used in the picture name
    pub index: usize,
    /// Relationship ID of the embedded image in the slide's .rels
    pub image_rel_id: String,
    /// Where the picture is drawn
    pub placement: SlidePlacement,
}

impl SlidePart {
    /// Render `ppt/slides/slide{index}.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let mut w = PartWriter::new()?;
        w.element("p:sld", &presentationml_namespaces(), |w| {
            shape_tree(w, &[], |w| self.write_picture(w))?;
            write_master_color_mapping(w)
        })?;
        w.finish()
    }

    fn write_picture(&self, w: &mut PartWriter) -> Result<()> {
        let name = format!("Picture {}", self.index);
        let p = &self.placement;
        let (x, y) = (p.offset_x.to_string(), p.offset_y.to_string());
        let (cx, cy) = (p.extent_width.to_string(), p.extent_height.to_string());

        w.element("p:pic", &[], |w| {
            w.element("p:nvPicPr", &[], |w| {
                w.empty("p:cNvPr", &[("id", "2"), ("name", name.as_str())])?;
                w.element("p:cNvPicPr", &[], |w| {
                    w.empty("a:picLocks", &[("noChangeAspect", "1")])
                })?;
                w.empty("p:nvPr", &[])
            })?;
            w.element("p:blipFill", &[], |w| {
                w.empty("a:blip", &[("r:embed", self.image_rel_id.as_str())])?;
                w.element("a:stretch", &[], |w| w.empty("a:fillRect", &[]))
            })?;
            w.element("p:spPr", &[], |w| {
                w.element("a:xfrm", &[], |w| {
                    w.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
                    w.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])
                })?;
                w.element("a:prstGeom", &[("prst", "rect")], |w| w.empty("a:avLst", &[]))
            })
        })
    }
}

/// `xmlns` attributes of a PresentationML part root.
pub(crate) fn presentationml_namespaces() -> [(&'static str, &'static str); 3] {
    [
        ("xmlns:a", NS_DRAWINGML),
        ("xmlns:r", NS_OFFICE_RELS),
        ("xmlns:p", NS_PRESENTATIONML),
    ]
}

/// Write `p:cSld` with an empty group-shape header, then the shapes from `shapes`.
pub(crate) fn shape_tree<F>(w: &mut PartWriter, csld_attrs: &[(&str, &str)], shapes: F) -> Result<()>
where
    F: FnOnce(&mut PartWriter) -> Result<()>,
{
    w.element("p:cSld", csld_attrs, |w| {
        w.element("p:spTree", &[], |w| {
            w.element("p:nvGrpSpPr", &[], |w| {
                w.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
                w.empty("p:cNvGrpSpPr", &[])?;
                w.empty("p:nvPr", &[])
            })?;
            w.element("p:grpSpPr", &[], |w| {
                w.element("a:xfrm", &[], |w| {
                    w.empty("a:off", &[("x", "0"), ("y", "0")])?;
                    w.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
                    w.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
                    w.empty("a:chExt", &[("cx", "0"), ("cy", "0")])
                })
            })?;
            shapes(w)
        })
    })
}

/// `p:clrMapOvr` that keeps the master's color mapping.
pub(crate) fn write_master_color_mapping(w: &mut PartWriter) -> Result<()> {
    w.element("p:clrMapOvr", &[], |w| w.empty("a:masterClrMapping", &[]))
}
