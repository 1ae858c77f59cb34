//! Per-conversion data model.
//!
//! These values are created fresh for one assembly and dropped once the
//! package bytes are returned.

mod slide;

pub use slide::*;
