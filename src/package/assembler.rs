//! Deck assembly.

use super::archive::PackageContents;
use super::options::PackageOptions;
use crate::error::{Error, Result};
use crate::image::read_dimensions;
use crate::layout::{place, Canvas};
use crate::model::{
    SlideIdentity, SlidePlan, PRESENTATION_MASTER_REL_ID, PRESENTATION_THEME_REL_ID,
    SLIDE_IMAGE_REL_ID, SLIDE_LAYOUT_REL_ID,
};
use crate::parts::schema::*;
use crate::parts::{
    app_properties_xml, rel_id, slide_layout_relationships, slide_layout_xml,
    slide_master_relationships, slide_master_xml, ContentTypes, PresentationPart, Relationships,
    SlidePart, SlideReference, Theme,
};
use log::{debug, info, warn};

/// Builds a PPTX package from page images.
///
/// An assembler holds only configuration; every call to
/// [`assemble`](Self::assemble) starts from a clean state.
///
/// # Example
///
/// ```no_run
/// use pagedeck::{PackageAssembler, PackageOptions};
///
/// let pages = vec![std::fs::read("page-1.png")?, std::fs::read("page-2.png")?];
/// let assembler = PackageAssembler::new(PackageOptions::new().with_title("Slides"));
/// let pptx = assembler.assemble(&pages)?;
/// std::fs::write("slides.pptx", pptx)?;
/// # Ok::<(), pagedeck::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageAssembler {
    options: PackageOptions,
    canvas: Canvas,
}

impl PackageAssembler {
    /// Create an assembler with the given options.
    pub fn new(options: PackageOptions) -> Self {
        Self {
            options,
            canvas: Canvas::STANDARD_4X3,
        }
    }

    /// The options this assembler was built with.
    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    /// Read every image header and compute slide geometry, in input order.
    ///
    /// Fails with [`Error::EmptyConversionResult`] for no images and with
    /// [`Error::MalformedImageHeader`] (carrying the slide number) for the
    /// first bad image.
    pub fn plan<I>(&self, images: &[I]) -> Result<Vec<SlidePlan>>
    where
        I: AsRef<[u8]> + Sync,
    {
        if images.is_empty() {
            warn!("no page images supplied");
            return Err(Error::EmptyConversionResult);
        }

        let results = self.plan_each(images);
        let plans = results.into_iter().collect::<Result<Vec<_>>>().inspect_err(|e| {
            warn!("rejecting deck of {} images: {}", images.len(), e);
        })?;

        for plan in &plans {
            debug!(
                "slide {}: {} px -> offset ({}, {}) extent {}x{}",
                plan.identity.index(),
                plan.dimensions,
                plan.placement.offset_x,
                plan.placement.offset_y,
                plan.placement.extent_width,
                plan.placement.extent_height
            );
        }

        Ok(plans)
    }

    #[cfg(feature = "parallel")]
    fn plan_each<I>(&self, images: &[I]) -> Vec<Result<SlidePlan>>
    where
        I: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        if self.options.parallel && images.len() > 1 {
            // Indexed collect keeps input order.
            images
                .par_iter()
                .enumerate()
                .map(|(i, data)| plan_slide(i + 1, data.as_ref(), self.canvas))
                .collect()
        } else {
            self.plan_sequential(images)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn plan_each<I>(&self, images: &[I]) -> Vec<Result<SlidePlan>>
    where
        I: AsRef<[u8]> + Sync,
    {
        self.plan_sequential(images)
    }

    fn plan_sequential<I: AsRef<[u8]>>(&self, images: &[I]) -> Vec<Result<SlidePlan>> {
        images
            .iter()
            .enumerate()
            .map(|(i, data)| plan_slide(i + 1, data.as_ref(), self.canvas))
            .collect()
    }

    /// Assemble a complete PPTX package, one slide per image.
    ///
    /// Nothing is returned unless every slide was built; the package bytes
    /// are produced only after the whole part graph has been checked.
    pub fn assemble<I>(&self, images: &[I]) -> Result<Vec<u8>>
    where
        I: AsRef<[u8]> + Sync,
    {
        let plans = self.plan(images)?;
        let contents = self.build_contents(images, &plans)?;
        contents.verify()?;

        let bytes = contents.write_zip(self.options.compression_level)?;
        info!(
            "assembled deck: {} slides, {} parts, {} bytes",
            plans.len(),
            contents.entries().len(),
            bytes.len()
        );
        Ok(bytes)
    }

    fn build_contents<'a, I>(
        &self,
        images: &'a [I],
        plans: &[SlidePlan],
    ) -> Result<PackageContents<'a>>
    where
        I: AsRef<[u8]>,
    {
        let mut contents = PackageContents::new();

        contents.add_content_types(self.content_types(plans))?;
        contents.add_relationships("", &self.package_relationships()?)?;

        if let Some(props) = &self.options.properties {
            contents.add_xml(CORE_PROPERTIES_PATH, props.to_core_xml()?)?;
            contents.add_xml(APP_PROPERTIES_PATH, app_properties_xml(plans.len())?)?;
        }

        contents.add_xml(PRESENTATION_PATH, self.presentation(plans).to_xml()?)?;
        contents.add_relationships(PRESENTATION_PATH, &presentation_relationships(plans)?)?;

        contents.add_xml(SLIDE_MASTER_PATH, slide_master_xml()?)?;
        contents.add_relationships(SLIDE_MASTER_PATH, &slide_master_relationships()?)?;
        contents.add_xml(SLIDE_LAYOUT_PATH, slide_layout_xml()?)?;
        contents.add_relationships(SLIDE_LAYOUT_PATH, &slide_layout_relationships()?)?;
        contents.add_xml(THEME_PATH, Theme::office().to_xml()?)?;

        for (plan, image) in plans.iter().zip(images) {
            let identity = plan.identity;
            let slide = SlidePart {
                index: identity.index(),
                image_rel_id: SLIDE_IMAGE_REL_ID.to_string(),
                placement: plan.placement,
            };
            let part_path = identity.part_path();

            contents.add_xml(part_path.as_str(), slide.to_xml()?)?;
            contents.add_relationships(&part_path, &slide_relationships(&identity)?)?;
            contents.add(identity.media_path(), image.as_ref())?;
        }

        Ok(contents)
    }

    fn content_types(&self, plans: &[SlidePlan]) -> ContentTypes {
        let mut types = ContentTypes::presentation();
        if self.options.properties.is_some() {
            types.add_override(CORE_PROPERTIES_PATH, CT_CORE_PROPERTIES);
            types.add_override(APP_PROPERTIES_PATH, CT_EXTENDED_PROPERTIES);
        }
        for plan in plans {
            types.add_override(&plan.identity.part_path(), CT_SLIDE);
        }
        types
    }

    fn package_relationships(&self) -> Result<Relationships> {
        let mut rels = Relationships::new();
        rels.add(rel_id(1), REL_OFFICE_DOCUMENT, PRESENTATION_PATH)?;
        if self.options.properties.is_some() {
            rels.add(rel_id(2), REL_CORE_PROPERTIES, CORE_PROPERTIES_PATH)?;
            rels.add(rel_id(3), REL_EXTENDED_PROPERTIES, APP_PROPERTIES_PATH)?;
        }
        Ok(rels)
    }

    fn presentation(&self, plans: &[SlidePlan]) -> PresentationPart {
        PresentationPart {
            master_rel_id: PRESENTATION_MASTER_REL_ID.to_string(),
            slides: plans
                .iter()
                .map(|plan| SlideReference {
                    id: plan.identity.slide_id(),
                    rel_id: plan.identity.presentation_rel_id(),
                })
                .collect(),
            canvas: self.canvas,
        }
    }
}

fn plan_slide(index: usize, data: &[u8], canvas: Canvas) -> Result<SlidePlan> {
    let dimensions = read_dimensions(data).map_err(|e| e.on_slide(index))?;
    Ok(SlidePlan {
        identity: SlideIdentity::new(index),
        dimensions,
        placement: place(dimensions, canvas),
    })
}

fn presentation_relationships(plans: &[SlidePlan]) -> Result<Relationships> {
    let mut rels = Relationships::new();
    rels.add(
        PRESENTATION_MASTER_REL_ID,
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml",
    )?;
    rels.add(PRESENTATION_THEME_REL_ID, REL_THEME, "theme/theme1.xml")?;
    for plan in plans {
        rels.add(
            plan.identity.presentation_rel_id(),
            REL_SLIDE,
            plan.identity.presentation_target(),
        )?;
    }
    Ok(rels)
}

fn slide_relationships(identity: &SlideIdentity) -> Result<Relationships> {
    Relationships::new()
        .with(
            SLIDE_LAYOUT_REL_ID,
            REL_SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
        )?
        .with(SLIDE_IMAGE_REL_ID, REL_IMAGE, identity.media_target())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::tests::png_header;

    #[test]
    fn test_empty_input() {
        let images: Vec<Vec<u8>> = Vec::new();
        let result = PackageAssembler::default().assemble(&images);
        assert!(matches!(result, Err(Error::EmptyConversionResult)));
    }

    #[test]
    fn test_plan_order_and_identity() {
        let images = vec![png_header(1000, 1000), png_header(2000, 1000), png_header(600, 800)];
        let plans = PackageAssembler::default().plan(&images).unwrap();

        assert_eq!(plans.len(), 3);
        for (i, plan) in plans.iter().enumerate() {
            assert_eq!(plan.identity.index(), i + 1);
        }
        assert_eq!(plans[0].placement.offset_x, 1_143_000);
        assert_eq!(plans[1].placement.offset_y, 1_143_000);
        assert_eq!(plans[2].dimensions.width, 600);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let images: Vec<Vec<u8>> = (1..=40).map(|i| png_header(100 * i, 1500)).collect();
        let parallel = PackageAssembler::new(PackageOptions::new().with_parallel(true))
            .plan(&images)
            .unwrap();
        let sequential = PackageAssembler::new(PackageOptions::new().with_parallel(false))
            .plan(&images)
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_first_bad_slide_is_reported() {
        let images = vec![
            png_header(100, 100),
            png_header(100, 100),
            vec![0u8; 10],
            vec![0u8; 3],
        ];
        let err = PackageAssembler::default().assemble(&images).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedImageHeader { slide: Some(3), .. }
        ));
    }

    #[test]
    fn test_presentation_relationships() {
        let images = vec![png_header(10, 10), png_header(10, 10)];
        let plans = PackageAssembler::default().plan(&images).unwrap();
        let rels = presentation_relationships(&plans).unwrap();

        assert_eq!(rels.len(), 4);
        assert_eq!(rels.get("rId1").unwrap().rel_type, REL_SLIDE_MASTER);
        assert_eq!(rels.get("rId2").unwrap().rel_type, REL_THEME);
        assert_eq!(rels.get("rId3").unwrap().target, "slides/slide1.xml");
        assert_eq!(rels.get("rId4").unwrap().target, "slides/slide2.xml");
    }

    #[test]
    fn test_slide_relationships() {
        let rels = slide_relationships(&SlideIdentity::new(5)).unwrap();
        assert_eq!(rels.get(SLIDE_IMAGE_REL_ID).unwrap().target, "../media/image5.png");
        assert_eq!(
            rels.get(SLIDE_LAYOUT_REL_ID).unwrap().rel_type,
            REL_SLIDE_LAYOUT
        );
    }

    #[test]
    fn test_content_types_with_properties() {
        let assembler = PackageAssembler::new(PackageOptions::new().with_title("T"));
        let images = vec![png_header(10, 10)];
        let plans = assembler.plan(&images).unwrap();
        let types = assembler.content_types(&plans);

        // 4 fixed parts, 2 docProps parts, 1 slide
        assert_eq!(types.overrides.len(), 7);
        assert_eq!(
            types.content_type_of(CORE_PROPERTIES_PATH),
            Some(CT_CORE_PROPERTIES)
        );
    }

    #[test]
    fn test_assemble_verifies() {
        let images = vec![png_header(1000, 1000)];
        let bytes = PackageAssembler::default().assemble(&images).unwrap();
        assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);
    }
}
