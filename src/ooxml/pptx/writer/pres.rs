//! The presentation: slide list, slide size and document title.
use crate::common::unit::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::{OpcPackage, PackageWriter};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::package::PresentationPackager;
use super::slide::{MutableSlide, SlideLayout};

/// First `p:sldId` value allowed by PresentationML.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation under construction.
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// EMUs
    slide_width: i64,
    /// EMUs
    slide_height: i64,
    doc_title: Option<String>,
}

impl MutablePresentation {
    /// Empty 16:9 presentation, 10 by 5.625 inches.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    pub fn with_size(slide_width: i64, slide_height: i64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            slide_height,
            doc_title: None,
        }
    }

    /// Append a title-only slide.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        self.add_slide_with_layout(SlideLayout::TitleOnly)
    }

    pub fn add_slide_with_layout(&mut self, layout: SlideLayout) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide at a 0-based index.
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Title recorded in `docProps/core.xml`.
    pub fn set_document_title(&mut self, title: &str) {
        self.doc_title = Some(title.to_string());
    }

    pub fn document_title(&self) -> Option<&str> {
        self.doc_title.as_deref()
    }

    /// `presentation.xml`, citing the master and every slide by the
    /// relationship IDs the packager assigned.
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "{} slides but {} slide relationships",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
            r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#,
        ));
        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{master_rel_id}"/></p:sldMasterIdLst>"#
        )?;

        // an empty sldIdLst is invalid, the element is omitted instead
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{rel_id}"/>"#, slide.slide_id())?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#,
            self.slide_width, self.slide_height
        )?;
        Ok(xml)
    }

    /// The in-memory package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        PresentationPackager::new(self).build()
    }

    /// `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.to_package()?)?)
    }

    /// Write the `.pptx` file, replacing any existing one.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, &self.to_package()?)?;
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
