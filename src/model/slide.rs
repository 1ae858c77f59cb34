//! Per-slide identity and geometry.

use crate::image::ImageDimensions;
use crate::layout::SlidePlacement;
use crate::naming;
use crate::parts::rel_id;
use serde::{Deserialize, Serialize};

/// Slide ID of the first slide; PowerPoint reserves IDs below 256.
pub const FIRST_SLIDE_ID: u32 = 256;

/// Relationships in `ppt/_rels/presentation.xml.rels` that precede the
/// slides: the slide master (`rId1`) and the theme (`rId2`).
pub const FIXED_PRESENTATION_RELS: usize = 2;

/// Relationship ID of the master in the presentation's .rels.
pub const PRESENTATION_MASTER_REL_ID: &str = "rId1";

/// Relationship ID of the theme in the presentation's .rels.
pub const PRESENTATION_THEME_REL_ID: &str = "rId2";

/// Relationship ID of the layout inside every slide's .rels.
pub const SLIDE_LAYOUT_REL_ID: &str = "rId1";

/// Relationship ID of the page image inside every slide's .rels.
pub const SLIDE_IMAGE_REL_ID: &str = "rId2";

/// Every name and ID derived from a 1-based slide number.
///
/// All of them come from the one index so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideIdentity {
    index: usize,
}

impl SlideIdentity {
    /// Identity of slide `index` (1-based).
    pub fn new(index: usize) -> Self {
        debug_assert!(index >= 1, "slide numbers start at 1");
        Self { index }
    }

    /// 1-based slide number.
    pub fn index(&self) -> usize {
        self.index
    }

    /// ID in the presentation's slide ID list.
    pub fn slide_id(&self) -> u32 {
        FIRST_SLIDE_ID + (self.index as u32 - 1)
    }

    /// Relationship ID of this slide in `ppt/_rels/presentation.xml.rels`.
    pub fn presentation_rel_id(&self) -> String {
        rel_id(self.index + FIXED_PRESENTATION_RELS)
    }

    /// Archive path of the slide part.
    pub fn part_path(&self) -> String {
        naming::slide_path(self.index)
    }

    /// Archive path of the slide's .rels.
    pub fn rels_path(&self) -> String {
        naming::slide_rels_path(self.index)
    }

    /// Archive path of the slide's page image.
    pub fn media_path(&self) -> String {
        naming::media_path(self.index)
    }

    /// Slide target as seen from `ppt/presentation.xml`.
    pub fn presentation_target(&self) -> String {
        format!("slides/slide{}.xml", self.index)
    }

    /// Image target as seen from the slide part.
    pub fn media_target(&self) -> String {
        format!("../media/image{}.png", self.index)
    }
}

/// Geometry of one slide, computed before any part is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePlan {
    pub identity: SlideIdentity,
    pub dimensions: ImageDimensions,
    pub placement: SlidePlacement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{resolve_target, rels_path_for};
    use crate::parts::schema::PRESENTATION_PATH;

    #[test]
    fn test_first_slide() {
        let id = SlideIdentity::new(1);
        assert_eq!(id.slide_id(), 256);
        assert_eq!(id.presentation_rel_id(), "rId3");
        assert_eq!(id.part_path(), "ppt/slides/slide1.xml");
        assert_eq!(id.rels_path(), "ppt/slides/_rels/slide1.xml.rels");
        assert_eq!(id.media_path(), "ppt/media/image1.png");
    }

    #[test]
    fn test_names_agree() {
        for index in [1, 2, 9, 10, 250] {
            let id = SlideIdentity::new(index);
            assert_eq!(
                resolve_target(PRESENTATION_PATH, &id.presentation_target()),
                id.part_path()
            );
            assert_eq!(
                resolve_target(&id.part_path(), &id.media_target()),
                id.media_path()
            );
            assert_eq!(rels_path_for(&id.part_path()), id.rels_path());
        }
    }

    #[test]
    fn test_slide_rel_ids_skip_fixed_entries() {
        let ids: Vec<String> = (1..=3)
            .map(|i| SlideIdentity::new(i).presentation_rel_id())
            .collect();
        assert_eq!(ids, vec!["rId3", "rId4", "rId5"]);
        assert_ne!(ids[0], PRESENTATION_MASTER_REL_ID);
        assert_ne!(ids[0], PRESENTATION_THEME_REL_ID);
    }
}
