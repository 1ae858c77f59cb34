//! Slide geometry.
//!
//! All lengths are in EMU (English Metric Units, 914400 EMU = 1 inch).

use crate::image::ImageDimensions;
use serde::{Deserialize, Serialize};

/// EMU per inch.
pub const EMU_PER_INCH: u64 = 914_400;

/// Fixed drawing surface of every slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in EMU
    pub width: u64,
    /// Height in EMU
    pub height: u64,
}

impl Canvas {
    /// Standard 4:3 slide, 10" x 7.5".
    pub const STANDARD_4X3: Canvas = Canvas {
        width: 10 * EMU_PER_INCH,
        height: 7 * EMU_PER_INCH + EMU_PER_INCH / 2,
    };

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::STANDARD_4X3
    }
}

/// Where a page image is drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePlacement {
    /// Left edge in EMU
    pub offset_x: u64,
    /// Top edge in EMU
    pub offset_y: u64,
    /// Drawn width in EMU
    pub extent_width: u64,
    /// Drawn height in EMU
    pub extent_height: u64,
}

/// Fit an image inside the canvas, preserving its aspect ratio and centering
/// it on the free axis.
///
/// Images relatively wider than the canvas span its full width; all others
/// (including an exact aspect match) span its full height. Rounding is
/// half-away-from-zero.
///
/// # Example
///
/// ```
/// use pagedeck::image::ImageDimensions;
/// use pagedeck::layout::{place, Canvas};
///
/// let placement = place(ImageDimensions { width: 2000, height: 1000 }, Canvas::STANDARD_4X3);
/// assert_eq!(placement.extent_width, 9_144_000);
/// assert_eq!(placement.extent_height, 4_572_000);
/// assert_eq!(placement.offset_y, 1_143_000);
/// ```
pub fn place(image: ImageDimensions, canvas: Canvas) -> SlidePlacement {
    debug_assert!(image.height > 0, "image height must be validated first");

    let image_aspect = image.aspect_ratio();
    let canvas_width = canvas.width as f64;
    let canvas_height = canvas.height as f64;

    if image_aspect > canvas.aspect_ratio() {
        let extent_height = round_emu(canvas_width / image_aspect).min(canvas.height);
        SlidePlacement {
            offset_x: 0,
            offset_y: round_emu((canvas.height - extent_height) as f64 / 2.0),
            extent_width: canvas.width,
            extent_height,
        }
    } else {
        let extent_width = round_emu(canvas_height * image_aspect).min(canvas.width);
        SlidePlacement {
            offset_x: round_emu((canvas.width - extent_width) as f64 / 2.0),
            offset_y: 0,
            extent_width,
            extent_height: canvas.height,
        }
    }
}

// f64::round rounds half away from zero; inputs here are never negative.
fn round_emu(value: f64) -> u64 {
    value.round() as u64
}
