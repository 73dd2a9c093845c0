//! Serializing a package: content types, relationships and parts.

use super::constants::content_type as ct;
use super::error::Result;
use super::package::OpcPackage;
use super::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use super::phys_pkg::PhysPkgWriter;
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::path::Path;

/// Extensions whose parts are declared once by a `Default` entry.
const DEFAULT_EXTENSIONS: [(&str, &str); 5] = [
    ("rels", ct::OPC_RELATIONSHIPS),
    ("xml", ct::XML),
    ("png", ct::PNG),
    ("jpeg", ct::JPEG),
    ("gif", ct::GIF),
];

/// Writes an [`OpcPackage`] as a ZIP archive.
pub struct PackageWriter;

impl PackageWriter {
    /// Write the package to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        std::fs::write(path, Self::to_bytes(package)?)?;
        Ok(())
    }

    /// Archive bytes: `[Content_Types].xml`, then `_rels/.rels`, then every
    /// part followed by its relationships.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut zip = PhysPkgWriter::new();

        let content_types = ContentTypes::of(package).to_xml();
        zip.add(&PackURI::new(CONTENT_TYPES_URI)?, content_types.as_bytes(), false)?;

        let package_rels = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        zip.add(&package_rels, package.rels().to_xml().as_bytes(), false)?;

        for part in package.iter_parts() {
            zip.add(part.partname(), part.blob(), part.is_binary())?;
            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                zip.add(&rels_uri, part.rels().to_xml().as_bytes(), false)?;
            }
        }

        zip.finish()
    }
}

/// Content of `[Content_Types].xml`.
#[derive(Debug, Default)]
struct ContentTypes {
    defaults: BTreeMap<&'static str, &'static str>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    fn of(package: &OpcPackage) -> Self {
        let mut types = Self::default();
        types.defaults.insert("rels", ct::OPC_RELATIONSHIPS);
        types.defaults.insert("xml", ct::XML);

        for part in package.iter_parts() {
            let ext = part.partname().ext().to_ascii_lowercase();
            let default = DEFAULT_EXTENSIONS
                .iter()
                .find(|(e, t)| *e == ext && *t == part.content_type());
            match default {
                Some(&(ext, content_type)) => {
                    types.defaults.insert(ext, content_type);
                },
                None => {
                    types.overrides.insert(
                        part.partname().to_string(),
                        part.content_type().to_string(),
                    );
                },
            }
        }
        types
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{ext}" ContentType="{content_type}"/>"#
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}
