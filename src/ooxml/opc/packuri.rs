//! Part names inside a package.
//!
//! A part name is an absolute, slash-separated path such as
//! `/ppt/slides/slide1.xml`. The ZIP member for it is the same path without the
//! leading slash, and its relationships live in a sibling `_rels` folder.

use super::error::{OpcError, Result};
use std::fmt;

/// The package itself, source of the package-level relationships.
pub const PACKAGE_URI: &str = "/";

/// Part name of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// Absolute name of a part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Validate and wrap a part name.
    ///
    /// The name must start with `/`, and apart from the package root it may
    /// neither end with `/` nor contain empty segments.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        let valid = uri == PACKAGE_URI
            || (uri.starts_with('/') && uri[1..].split('/').all(|segment| !segment.is_empty()));
        if !valid {
            return Err(OpcError::InvalidPackUri(uri));
        }
        Ok(Self { uri })
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Folder holding the part, `/ppt/slides` for `/ppt/slides/slide1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rsplit_once('/') {
            Some(("", _)) | None => PACKAGE_URI,
            Some((base, _)) => base,
        }
    }

    /// Last segment of the name.
    pub fn filename(&self) -> &str {
        self.uri.rsplit_once('/').map_or("", |(_, name)| name)
    }

    /// Extension without the dot, empty when there is none.
    pub fn ext(&self) -> &str {
        self.filename().rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// ZIP member name.
    pub fn membername(&self) -> &str {
        self.uri.strip_prefix('/').unwrap_or(&self.uri)
    }

    /// Reference to this part from a source folder, as written in `Target`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.membername().split('/').collect();
        let shared = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

        let mut target = "../".repeat(from.len() - shared);
        target.push_str(&to[shared..].join("/"));
        target
    }

    /// Name of the relationships part that belongs to this part.
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base = self.base_uri().trim_end_matches('/');
        Self::new(format!("{}/_rels/{}.rels", base, self.filename()))
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
        assert!(PackURI::new(PACKAGE_URI).is_ok());
        for bad in ["ppt/presentation.xml", "/ppt/", "/ppt//slide.xml", ""] {
            assert!(
                matches!(PackURI::new(bad), Err(OpcError::InvalidPackUri(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/ppt/media/image3.png").unwrap();
        assert_eq!(uri.base_uri(), "/ppt/media");
        assert_eq!(uri.filename(), "image3.png");
        assert_eq!(uri.ext(), "png");
        assert_eq!(uri.membername(), "ppt/media/image3.png");

        let top = PackURI::new(CONTENT_TYPES_URI).unwrap();
        assert_eq!(top.base_uri(), "/");
        assert_eq!(top.ext(), "xml");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.membername(), "");
    }

    #[test]
    fn test_relative_ref() {
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(
            layout.relative_ref("/ppt/slides"),
            "../slideLayouts/slideLayout1.xml"
        );

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(slide.relative_ref("/ppt"), "slides/slide1.xml");
        assert_eq!(slide.relative_ref("/"), "ppt/slides/slide1.xml");
    }

    #[test]
    fn test_rels_uri() {
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(
            uri.rels_uri().unwrap().as_str(),
            "/ppt/slides/_rels/slide1.xml.rels"
        );

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }
}
