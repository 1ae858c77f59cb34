//! The theme part (`ppt/theme/theme1.xml`).

use super::schema::NS_DRAWINGML;
use super::xml::PartWriter;
use crate::error::Result;

/// A theme color slot value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    /// System color with its last known RGB value
    System {
        name: &'static str,
        last: &'static str,
    },
    /// Plain sRGB hex value
    Rgb(&'static str),
}

/// Colors, fonts and format scheme shared by every slide.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub scheme_name: &'static str,
    /// Slots in schema order: dk1, lt1, dk2, lt2, accent1-6, hlink, folHlink
    pub colors: [(&'static str, ThemeColor); 12],
    pub major_font: &'static str,
    pub minor_font: &'static str,
}

impl Theme {
    /// The classic "Office Theme".
    pub fn office() -> Self {
        Self {
            name: "Office Theme",
            scheme_name: "Office",
            colors: [
                (
                    "a:dk1",
                    ThemeColor::System {
                        name: "windowText",
                        last: "000000",
                    },
                ),
                (
                    "a:lt1",
                    ThemeColor::System {
                        name: "window",
                        last: "FFFFFF",
                    },
                ),
                ("a:dk2", ThemeColor::Rgb("1F497D")),
                ("a:lt2", ThemeColor::Rgb("EEECE1")),
                ("a:accent1", ThemeColor::Rgb("4F81BD")),
                ("a:accent2", ThemeColor::Rgb("C0504D")),
                ("a:accent3", ThemeColor::Rgb("9BBB59")),
                ("a:accent4", ThemeColor::Rgb("8064A2")),
                ("a:accent5", ThemeColor::Rgb("4BACC6")),
                ("a:accent6", ThemeColor::Rgb("F79646")),
                ("a:hlink", ThemeColor::Rgb("0000FF")),
                ("a:folHlink", ThemeColor::Rgb("800080")),
            ],
            major_font: "Calibri",
            minor_font: "Calibri",
        }
    }

    /// Render the theme part.
    pub fn to_xml(&self) -> Result<String> {
        let mut w = PartWriter::new()?;
        w.element("a:theme", &[("xmlns:a", NS_DRAWINGML), ("name", self.name)], |w| {
            w.element("a:themeElements", &[], |w| {
                self.write_color_scheme(w)?;
                self.write_font_scheme(w)?;
                write_format_scheme(w, self.scheme_name)
            })
        })?;
        w.finish()
    }

    fn write_color_scheme(&self, w: &mut PartWriter) -> Result<()> {
        w.element("a:clrScheme", &[("name", self.scheme_name)], |w| {
            for (slot, color) in &self.colors {
                w.element(slot, &[], |w| match *color {
                    ThemeColor::System { name, last } => {
                        w.empty("a:sysClr", &[("val", name), ("lastClr", last)])
                    }
                    ThemeColor::Rgb(hex) => w.empty("a:srgbClr", &[("val", hex)]),
                })?;
            }
            Ok(())
        })
    }

    fn write_font_scheme(&self, w: &mut PartWriter) -> Result<()> {
        w.element("a:fontScheme", &[("name", self.scheme_name)], |w| {
            for (tag, typeface) in [("a:majorFont", self.major_font), ("a:minorFont", self.minor_font)] {
                w.element(tag, &[], |w| {
                    w.empty("a:latin", &[("typeface", typeface)])?;
                    w.empty("a:ea", &[("typeface", "")])?;
                    w.empty("a:cs", &[("typeface", "")])
                })?;
            }
            Ok(())
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::office()
    }
}

/// Line widths of the three line styles, in EMU.
const LINE_WIDTHS: [&str; 3] = ["9525", "25400", "38100"];

fn write_format_scheme(w: &mut PartWriter, name: &str) -> Result<()> {
    w.element("a:fmtScheme", &[("name", name)], |w| {
        w.element("a:fillStyleLst", &[], write_fill_styles)?;
        w.element("a:lnStyleLst", &[], |w| {
            for width in LINE_WIDTHS {
                w.element(
                    "a:ln",
                    &[("w", width), ("cap", "flat"), ("cmpd", "sng"), ("algn", "ctr")],
                    |w| {
                        write_placeholder_fill(w)?;
                        w.empty("a:prstDash", &[("val", "solid")])
                    },
                )?;
            }
            Ok(())
        })?;
        w.element("a:effectStyleLst", &[], |w| {
            for _ in 0..3 {
                w.element("a:effectStyle", &[], |w| w.empty("a:effectLst", &[]))?;
            }
            Ok(())
        })?;
        w.element("a:bgFillStyleLst", &[], write_fill_styles)
    })
}

// One solid fill and two gradient fills; the schema requires three entries.
fn write_fill_styles(w: &mut PartWriter) -> Result<()> {
    write_placeholder_fill(w)?;
    w.empty("a:gradFill", &[("rotWithShape", "1")])?;
    w.empty("a:gradFill", &[("rotWithShape", "1")])
}

fn write_placeholder_fill(w: &mut PartWriter) -> Result<()> {
    w.element("a:solidFill", &[], |w| w.empty("a:schemeClr", &[("val", "phClr")]))
}
