//! Error types for the pagedeck library.

use std::io;
use thiserror::Error;

/// Result type alias for pagedeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a slide deck.
///
/// Every variant is terminal for the current assembly: no package bytes are
/// produced once one of these is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading input images from disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A page image has a short or invalid PNG header.
    #[error("{}", malformed_message(*slide, reason))]
    MalformedImageHeader {
        /// 1-based slide index, when the image was part of a deck.
        slide: Option<usize>,
        /// What was wrong with the header.
        reason: String,
    },

    /// No page images were supplied.
    #[error("No page images to package")]
    EmptyConversionResult,

    /// Writing the archive or one of its parts failed.
    #[error("Packaging failure: {0}")]
    PackagingFailure(String),
}

fn malformed_message(slide: Option<usize>, reason: &str) -> String {
    match slide {
        Some(n) => format!("Malformed image header on slide {}: {}", n, reason),
        None => format!("Malformed image header: {}", reason),
    }
}

impl Error {
    /// Create a header error that is not yet tied to a slide.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedImageHeader {
            slide: None,
            reason: reason.into(),
        }
    }

    /// Attach a 1-based slide index to a header error.
    ///
    /// Other variants are returned unchanged.
    pub fn on_slide(self, index: usize) -> Self {
        match self {
            Error::MalformedImageHeader { reason, .. } => Error::MalformedImageHeader {
                slide: Some(index),
                reason,
            },
            other => other,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::PackagingFailure(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::PackagingFailure(err.to_string())
    }
}
