//! Text boxes and pictures.
use crate::common::xml::escape_xml;
use crate::layout::Rect;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{ImageFormat, TextFormat};

/// A free shape on a slide, positioned by its frame in EMUs.
#[derive(Debug, Clone)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    pub(crate) frame: Rect,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    Text {
        text: String,
        format: TextFormat,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        description: String,
    },
}

impl MutableShape {
    pub(crate) fn text_box(shape_id: u32, text: String, frame: Rect) -> Self {
        Self {
            shape_id,
            frame,
            kind: ShapeKind::Text {
                text,
                format: TextFormat::default(),
            },
        }
    }

    pub(crate) fn picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        frame: Rect,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            frame,
            kind: ShapeKind::Picture {
                data,
                format,
                description,
            },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn bounds(&self) -> Rect {
        self.frame
    }

    /// Text of a text box, `None` for pictures.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Text { text, .. } => Some(text),
            ShapeKind::Picture { .. } => None,
        }
    }

    pub fn text_format(&self) -> Option<&TextFormat> {
        match &self.kind {
            ShapeKind::Text { format, .. } => Some(format),
            ShapeKind::Picture { .. } => None,
        }
    }

    pub fn is_picture(&self) -> bool {
        matches!(self.kind, ShapeKind::Picture { .. })
    }

    /// Font size in points. Pictures are left untouched.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        if let ShapeKind::Text { format, .. } = &mut self.kind {
            format.size = Some(size);
        }
        self
    }

    /// Embedded bytes and their format, for pictures.
    pub(crate) fn media(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.kind {
            ShapeKind::Picture { data, format, .. } => Some((data, *format)),
            ShapeKind::Text { .. } => None,
        }
    }

    /// Append the shape's markup. Pictures need the relationship ID of their
    /// media part.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        let id = self.shape_id;
        match &self.kind {
            ShapeKind::Text { text, format } => {
                write!(
                    xml,
                    r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
                    id - 1
                )?;
                xml.push_str("<p:spPr>");
                write_xfrm(xml, self.frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
                xml.push_str(
                    r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#,
                );
                write_paragraph(xml, text, format)?;
                xml.push_str("</p:txBody></p:sp>");
            },
            ShapeKind::Picture { description, .. } => {
                write!(
                    xml,
                    r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {}" descr="{}"/>"#,
                    id - 1,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>"#);
                write!(
                    xml,
                    r#"<p:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>"#,
                    rel_id.unwrap_or_default()
                )?;
                xml.push_str("<p:spPr>");
                write_xfrm(xml, self.frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#);
            },
        }
        Ok(())
    }
}

/// `<a:xfrm>` for a frame.
pub(crate) fn write_xfrm(xml: &mut String, frame: Rect) -> Result<()> {
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        frame.left, frame.top, frame.width, frame.height
    )?;
    Ok(())
}

/// A paragraph holding one run of `text`.
pub(crate) fn write_paragraph(xml: &mut String, text: &str, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:p>");
    if format.centered {
        xml.push_str(r#"<a:pPr algn="ctr"/>"#);
    }

    xml.push_str(r#"<a:r><a:rPr lang="en-US" dirty="0""#);
    if let Some(size) = format.size {
        // hundredths of a point
        write!(xml, r#" sz="{}""#, (size * 100.0).round() as u32)?;
    }
    write!(xml, "/><a:t>{}</a:t></a:r></a:p>", escape_xml(text))?;
    Ok(())
}
