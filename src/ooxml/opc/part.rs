//! Parts of a package.
//!
//! A part is a named stream with a content type and its own relationships.
//! Markup parts are usually created empty, related to other parts, and only
//! given their XML once the relationship identifiers are known.

use super::packuri::PackURI;
use super::rel::Relationships;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Xml(String),
    Binary(Vec<u8>),
}

/// A part with its content and outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    body: Body,
    rels: Relationships,
}

impl Part {
    /// Markup part.
    pub fn xml(partname: PackURI, content_type: impl Into<String>, xml: impl Into<String>) -> Self {
        Self::with_body(partname, content_type.into(), Body::Xml(xml.into()))
    }

    /// Binary part such as an embedded picture.
    pub fn binary(partname: PackURI, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self::with_body(partname, content_type.into(), Body::Binary(data))
    }

    fn with_body(partname: PackURI, content_type: String, body: Body) -> Self {
        Self {
            partname,
            content_type,
            body,
            rels: Relationships::new(),
        }
    }

    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Serialized content.
    pub fn blob(&self) -> &[u8] {
        match &self.body {
            Body::Xml(xml) => xml.as_bytes(),
            Body::Binary(data) => data,
        }
    }

    /// Whether the content is already compressed binary data.
    pub fn is_binary(&self) -> bool {
        matches!(self.body, Body::Binary(_))
    }

    /// Replace the markup of an XML part. Binary parts become XML parts.
    pub fn set_xml(&mut self, xml: impl Into<String>) {
        self.body = Body::Xml(xml.into());
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to `target`, returning the relationship identifier.
    ///
    /// Relating twice to the same target with the same type returns the first
    /// identifier.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = Part::xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            "",
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout2.xml").unwrap();
        let image = PackURI::new("/ppt/media/image1.png").unwrap();

        assert_eq!(slide.relate_to(&layout, "slideLayout"), "rId1");
        assert_eq!(slide.relate_to(&image, "image"), "rId2");
        assert_eq!(slide.relate_to(&image, "image"), "rId2");
        assert_eq!(
            slide.rels().get("rId2").unwrap().target_ref(),
            "../media/image1.png"
        );
    }

    #[test]
    fn test_bodies() {
        let picture = Part::binary(
            PackURI::new("/ppt/media/image1.png").unwrap(),
            "image/png",
            vec![1, 2, 3],
        );
        assert_eq!(picture.blob(), &[1, 2, 3]);
        assert!(picture.is_binary());
        assert!(picture.rels().is_empty());

        let mut pres = Part::xml(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            "application/xml",
            "",
        );
        assert!(!pres.is_binary());
        pres.set_xml("<p:presentation/>");
        assert_eq!(pres.blob(), b"<p:presentation/>");
    }
}
