//! Slides and their layouts.
use crate::layout::Rect;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::super::format::{ImageFormat, TextFormat};
use super::shape::{MutableShape, write_paragraph, write_xfrm};

/// Slide layouts available in the built-in slide master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideLayout {
    /// Centered title with subtitle area (layout 1)
    TitleSlide,
    /// Title bar only, body left free for content (layout 2)
    #[default]
    TitleOnly,
}

impl SlideLayout {
    /// All layouts, in the order they appear in the slide master.
    pub const ALL: [SlideLayout; 2] = [SlideLayout::TitleSlide, SlideLayout::TitleOnly];

    /// 1-based layout number, used for the `slideLayoutN.xml` partname.
    pub fn number(&self) -> usize {
        match self {
            Self::TitleSlide => 1,
            Self::TitleOnly => 2,
        }
    }

    /// Placeholder type the layout declares for its title.
    pub(crate) fn title_placeholder(&self) -> &'static str {
        match self {
            Self::TitleSlide => "ctrTitle",
            Self::TitleOnly => "title",
        }
    }
}

/// One slide: an optional title placeholder followed by free shapes.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    pub(crate) title: Option<String>,
    /// Overrides the frame inherited from the layout
    pub(crate) title_geometry: Option<Rect>,
    pub(crate) title_format: TextFormat,
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            title: None,
            title_geometry: None,
            title_format: TextFormat::default(),
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Place the title placeholder explicitly.
    pub fn set_title_geometry(&mut self, frame: Rect) {
        self.title_geometry = Some(frame);
    }

    pub fn title_geometry(&self) -> Option<Rect> {
        self.title_geometry
    }

    pub fn set_title_format(&mut self, format: TextFormat) {
        self.title_format = format;
    }

    pub fn title_format(&self) -> &TextFormat {
        &self.title_format
    }

    fn push_shape(&mut self, make: impl FnOnce(u32) -> MutableShape) -> &mut MutableShape {
        // 1 is the shape tree, 2 the title
        let id = self.shapes.len() as u32 + 3;
        self.shapes.push(make(id));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add a text box. The returned shape takes formatting builders.
    pub fn add_text_box(&mut self, text: &str, frame: Rect) -> &mut MutableShape {
        self.push_shape(|id| MutableShape::text_box(id, text.to_string(), frame))
    }

    /// Add a picture from encoded bytes. The format is sniffed from the
    /// leading signature.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        frame: Rect,
        description: Option<String>,
    ) -> Result<&mut MutableShape> {
        let format = ImageFormat::detect_from_bytes(&data).ok_or_else(|| {
            OoxmlError::UnsupportedImage(format!("{} bytes, no known signature", data.len()))
        })?;
        let description = description.unwrap_or_else(|| "Picture".to_string());
        Ok(self.push_shape(|id| MutableShape::picture(id, data, format, frame, description)))
    }

    /// Free shapes, title excluded.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Media of every picture, in shape order.
    pub(crate) fn media(&self) -> impl Iterator<Item = (&[u8], ImageFormat)> {
        self.shapes.iter().filter_map(MutableShape::media)
    }

    /// Slide markup. `image_rel_ids` holds the relationship ID of every
    /// picture, in shape order.
    pub(crate) fn to_xml(&self, image_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 768);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
            r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
            "<p:cSld><p:spTree>",
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        ));

        if let Some(title) = &self.title {
            self.write_title_shape(&mut xml, title)?;
        }

        let mut rel_ids = image_rel_ids.iter();
        for shape in &self.shapes {
            let rel_id = if shape.is_picture() {
                let id = rel_ids.next().ok_or_else(|| {
                    OoxmlError::Xml(format!(
                        "picture {} on slide {} has no relationship",
                        shape.shape_id(),
                        self.slide_id
                    ))
                })?;
                Some(id.as_str())
            } else {
                None
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
        Ok(xml)
    }

    /// The title placeholder is always shape 2.
    fn write_title_shape(&self, xml: &mut String, title: &str) -> Result<()> {
        write!(
            xml,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="{}"/></p:nvPr></p:nvSpPr>"#,
            self.layout.title_placeholder()
        )?;
        match self.title_geometry {
            Some(frame) => {
                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                xml.push_str("</p:spPr>");
            },
            None => xml.push_str("<p:spPr/>"),
        }
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
        write_paragraph(xml, title, &self.title_format)?;
        xml.push_str("</p:txBody></p:sp>");
        Ok(())
    }
}
