//! PNG header reading.
//!
//! Page images are only inspected as far as the IHDR chunk; pixel data is
//! never decoded.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// PNG file signature: \x89PNG\r\n\x1a\n
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Chunk type of the image header, which must be the first chunk.
const IHDR_TYPE: [u8; 4] = *b"IHDR";

/// Offset of the IHDR width field (signature + chunk length + chunk type).
const WIDTH_OFFSET: usize = 16;

/// Offset of the IHDR height field.
const HEIGHT_OFFSET: usize = 20;

/// Bytes that must be present to read both dimensions.
pub const HEADER_LEN: usize = 24;

/// Pixel dimensions of a page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels (always > 0)
    pub width: u32,
    /// Height in pixels (always > 0)
    pub height: u32,
}

impl ImageDimensions {
    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read the pixel dimensions of a PNG image from its header.
///
/// # Example
///
/// ```
/// use pagedeck::image::read_dimensions;
///
/// let mut png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
/// png.extend_from_slice(&13u32.to_be_bytes());
/// png.extend_from_slice(b"IHDR");
/// png.extend_from_slice(&640u32.to_be_bytes());
/// png.extend_from_slice(&480u32.to_be_bytes());
///
/// let dims = read_dimensions(&png)?;
/// assert_eq!((dims.width, dims.height), (640, 480));
/// # Ok::<(), pagedeck::Error>(())
/// ```
pub fn read_dimensions(data: &[u8]) -> Result<ImageDimensions> {
    if data.len() < HEADER_LEN {
        return Err(Error::malformed(format!(
            "expected at least {} bytes, got {}",
            HEADER_LEN,
            data.len()
        )));
    }

    if !is_png(data) {
        return Err(Error::malformed("missing PNG signature"));
    }

    if data[12..16] != IHDR_TYPE {
        return Err(Error::malformed("first chunk is not IHDR"));
    }

    let width = read_u32_be(data, WIDTH_OFFSET);
    let height = read_u32_be(data, HEIGHT_OFFSET);

    if width == 0 || height == 0 {
        return Err(Error::malformed(format!(
            "zero-sized image ({}x{})",
            width, height
        )));
    }

    Ok(ImageDimensions { width, height })
}

/// Check if data starts with the PNG signature.
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
