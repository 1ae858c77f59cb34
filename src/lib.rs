//! # pagedeck
//!
//! Assemble page images into a PowerPoint (PPTX) slide deck.
//!
//! Each PNG becomes one slide of a fixed 4:3 deck, scaled to fit and
//! centered. The library reads only the PNG header, writes every OPC part
//! (content types, relationships, presentation, master, layout, theme and
//! slides) and returns the package bytes. Rasterizing a PDF into page
//! images is left to the caller.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Page images in slide order
//! let pages = vec![std::fs::read("page-1.png")?, std::fs::read("page-2.png")?];
//!
//! let pptx = pagedeck::assemble(&pages)?;
//! std::fs::write("deck.pptx", pptx)?;
//! # Ok::<(), pagedeck::Error>(())
//! ```
//!
//! ## With Options
//!
//! ```no_run
//! use pagedeck::PackageOptions;
//!
//! let options = PackageOptions::new()
//!     .with_title("Quarterly Review")
//!     .with_compression_level(9);
//!
//! let pages = pagedeck::collect_page_images("rendered/")?;
//! let pptx = pagedeck::assemble_files_with_options(&pages, options)?;
//! # Ok::<(), pagedeck::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): read headers and compute placements with rayon
//! - `async`: Async file input with Tokio

pub mod error;
pub mod image;
pub mod layout;
pub mod model;
pub mod naming;
pub mod package;
pub mod parts;

// Re-exports
pub use error::{Error, Result};
pub use image::{read_dimensions, ImageDimensions};
pub use layout::{place, Canvas, SlidePlacement};
pub use model::{SlideIdentity, SlidePlan};
pub use naming::deck_file_name;
pub use package::{PackageAssembler, PackageOptions};
pub use parts::schema::PPTX_MEDIA_TYPE;
pub use parts::DocumentProperties;

use std::fs;
use std::path::{Path, PathBuf};

/// Assemble a deck from in-memory PNG images with default options.
///
/// # Example
///
/// ```no_run
/// let pages: Vec<Vec<u8>> = vec![std::fs::read("page-1.png")?];
/// let pptx = pagedeck::assemble(&pages)?;
/// # Ok::<(), pagedeck::Error>(())
/// ```
pub fn assemble<I>(images: &[I]) -> Result<Vec<u8>>
where
    I: AsRef<[u8]> + Sync,
{
    PackageAssembler::default().assemble(images)
}

/// Assemble a deck from in-memory PNG images.
pub fn assemble_with_options<I>(images: &[I], options: PackageOptions) -> Result<Vec<u8>>
where
    I: AsRef<[u8]> + Sync,
{
    PackageAssembler::new(options).assemble(images)
}

/// Read PNG files in the given order and assemble them.
///
/// # Example
///
/// ```no_run
/// let pptx = pagedeck::assemble_files(&["page-1.png", "page-2.png"])?;
/// # Ok::<(), pagedeck::Error>(())
/// ```
pub fn assemble_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<u8>> {
    assemble_files_with_options(paths, PackageOptions::default())
}

/// Read PNG files in the given order and assemble them with options.
pub fn assemble_files_with_options<P: AsRef<Path>>(
    paths: &[P],
    options: PackageOptions,
) -> Result<Vec<u8>> {
    let images = paths
        .iter()
        .map(|p| fs::read(p.as_ref()))
        .collect::<std::io::Result<Vec<_>>>()?;
    assemble_with_options(&images, options)
}

/// Read PNG files asynchronously and assemble them.
#[cfg(feature = "async")]
pub async fn assemble_files_async<P: AsRef<Path>>(
    paths: &[P],
    options: PackageOptions,
) -> Result<Vec<u8>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(tokio::fs::read(path.as_ref()).await?);
    }
    assemble_with_options(&images, options)
}

/// List the `.png` files of a directory in page order.
///
/// Names are compared with numbers as numbers, so `page-2.png` comes before
/// `page-10.png`.
pub fn collect_page_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if is_png && path.is_file() {
            pages.push(path);
        }
    }
    pages.sort_by(|a, b| naming::compare_page_names(a, b));
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::tests::png_header;

    #[test]
    fn test_assemble_empty() {
        let images: [&[u8]; 0] = [];
        assert!(matches!(
            assemble(&images),
            Err(Error::EmptyConversionResult)
        ));
    }

    #[test]
    fn test_assemble_borrowed_slices() {
        let page = png_header(800, 600);
        let images: Vec<&[u8]> = vec![&page, &page];
        let bytes = assemble(&images).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_collect_page_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page-10.png", "page-2.png", "page-1.PNG", "notes.txt"] {
            fs::write(dir.path().join(name), png_header(10, 10)).unwrap();
        }
        fs::create_dir(dir.path().join("page-3.png")).unwrap();

        let pages = collect_page_images(dir.path()).unwrap();
        let names: Vec<_> = pages
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["page-1.PNG", "page-2.png", "page-10.png"]);
    }

    #[test]
    fn test_assemble_missing_file() {
        let result = assemble_files(&["does/not/exist.png"]);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
