//! Package assembly: from ordered page images to PPTX bytes.
//!
//! # Example
//!
//! ```no_run
//! use pagedeck::package::{PackageAssembler, PackageOptions};
//!
//! let pages = vec![std::fs::read("page-1.png")?];
//! let pptx = PackageAssembler::new(PackageOptions::default()).assemble(&pages)?;
//! # Ok::<(), pagedeck::Error>(())
//! ```

mod archive;
mod assembler;
mod options;

pub use assembler::PackageAssembler;
pub use options::{
    PackageOptions, DEFAULT_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL, MIN_COMPRESSION_LEVEL,
};
