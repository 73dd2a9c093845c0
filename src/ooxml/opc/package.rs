//! In-memory package: package-level relationships plus the parts to write.
//!
//! Parts are keyed by name, so the ZIP member order only depends on the
//! part names.

use super::error::{OpcError, Result};
use super::packuri::{PACKAGE_URI, PackURI};
use super::part::Part;
use super::rel::Relationships;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: BTreeMap<PackURI, Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part. Part names are unique within a package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        let partname = part.partname().clone();
        if self.parts.contains_key(&partname) {
            return Err(OpcError::DuplicatePart(partname.to_string()));
        }
        self.parts.insert(partname, part);
        Ok(())
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Parts in name order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship identifier.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels
            .get_or_add(reltype, &partname.relative_ref(PACKAGE_URI))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(uri: &str) -> Part {
        Part::xml(PackURI::new(uri).unwrap(), "application/xml", "<x/>")
    }

    #[test]
    fn test_add_and_get_part() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/ppt/presentation.xml")).unwrap();
        pkg.add_part(part("/docProps/app.xml")).unwrap();

        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(pkg.contains_part(&uri));
        assert_eq!(pkg.get_part(&uri).unwrap().blob(), b"<x/>");
        assert_eq!(pkg.part_count(), 2);

        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, vec!["/docProps/app.xml", "/ppt/presentation.xml"]);

        let missing = PackURI::new("/ppt/slides/slide9.xml").unwrap();
        assert!(matches!(
            pkg.get_part(&missing),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(part("/ppt/presentation.xml")).unwrap();
        let err = pkg.add_part(part("/ppt/presentation.xml")).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
    }

    #[test]
    fn test_package_relationship_target() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(pkg.relate_to(&uri, "officeDocument"), "rId1");
        assert_eq!(
            pkg.rels().get("rId1").unwrap().target_ref(),
            "ppt/presentation.xml"
        );
    }
}
