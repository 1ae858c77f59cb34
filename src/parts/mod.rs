//! Renderers for the XML parts of a deck.
//!
//! Each part kind is a typed value with a `to_xml` method (or a free
//! function for parts without inputs). Renderers never touch shared state;
//! the IDs and paths they embed are passed in by the assembler.

mod content_types;
mod master;
mod presentation;
mod properties;
mod relationships;
pub mod schema;
mod slide;
mod theme;
mod xml;

pub use content_types::{ContentTypes, DefaultType, OverrideType};
pub use master::{
    slide_layout_relationships, slide_layout_xml, slide_master_relationships, slide_master_xml,
    LAYOUT_MASTER_REL_ID, MASTER_LAYOUT_REL_ID, MASTER_THEME_REL_ID, SLIDE_LAYOUT_ID,
};
pub use presentation::{PresentationPart, SlideReference, SLIDE_MASTER_ID};
pub use properties::{app_properties_xml, DocumentProperties, APPLICATION_NAME};
pub use relationships::{rel_id, Relationship, Relationships};
pub use slide::SlidePart;
pub use theme::{Theme, ThemeColor};
