//! Built-in templates for the fixed parts of a new presentation.
//!
//! The slide master, layouts, theme and property parts are embedded from
//! `resources/` at compile time. Document properties carry per-save values and
//! are generated instead.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::writer::SlideLayout;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

macro_rules! resource {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $path))
    };
}

/// Application name recorded in the document properties.
const APPLICATION: &str = "figdeck";

/// Get the slide master XML.
///
/// The master lists its layouts as rId1.. in [`SlideLayout::ALL`] order.
pub fn slide_master_xml() -> &'static str {
    resource!("slideMasters/slideMaster1.xml")
}

/// Get the XML for a slide layout.
pub fn slide_layout_xml(layout: SlideLayout) -> &'static str {
    match layout {
        SlideLayout::TitleSlide => resource!("slideLayouts/slideLayout1.xml"),
        SlideLayout::TitleOnly => resource!("slideLayouts/slideLayout2.xml"),
    }
}

/// Get the theme XML.
pub fn theme_xml() -> &'static str {
    resource!("theme/theme1.xml")
}

/// Get the table styles XML.
pub fn table_styles_xml() -> &'static str {
    resource!("tableStyles.xml")
}

/// Get the view properties XML.
pub fn view_props_xml() -> &'static str {
    resource!("viewProps.xml")
}

/// Get the presentation properties XML.
pub fn pres_props_xml() -> &'static str {
    resource!("presProps.xml")
}

/// Generate core document properties (`docProps/core.xml`).
pub fn core_props_xml(title: Option<&str>, timestamp: DateTime<Utc>) -> Result<String> {
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

    if let Some(title) = title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    write!(xml, "<dc:creator>{}</dc:creator>", APPLICATION)?;
    xml.push_str("<cp:revision>1</cp:revision>");
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        stamp
    )?;
    write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        stamp
    )?;
    xml.push_str("</cp:coreProperties>");

    Ok(xml)
}

/// Generate extended document properties (`docProps/app.xml`).
pub fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(xml, "<Application>{}</Application>", APPLICATION)?;
    xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_templates_are_embedded() {
        assert!(slide_master_xml().contains("<p:sldMaster"));
        assert!(slide_master_xml().contains(r#"r:id="rId2""#));
        assert!(slide_layout_xml(SlideLayout::TitleSlide).contains(r#"name="Title Slide""#));
        assert!(slide_layout_xml(SlideLayout::TitleOnly).contains(r#"name="Title Only""#));
        assert!(theme_xml().contains("<a:clrScheme"));
        assert!(table_styles_xml().contains("tblStyleLst"));
        assert!(view_props_xml().contains("<p:viewPr"));
        assert!(pres_props_xml().contains("<p:presentationPr"));
    }

    #[test]
    fn test_core_props() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let xml = core_props_xml(Some("a & b"), ts).unwrap();
        assert!(xml.contains("<dc:title>a &amp; b</dc:title>"));
        assert!(xml.contains(">2024-03-01T12:30:00Z</dcterms:created>"));

        let xml = core_props_xml(None, ts).unwrap();
        assert!(!xml.contains("<dc:title>"));
    }

    #[test]
    fn test_app_props() {
        let xml = app_props_xml(3).unwrap();
        assert!(xml.contains("<Slides>3</Slides>"));
    }
}
