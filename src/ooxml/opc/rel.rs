//! Relationships from a part (or the package) to other parts.
//!
//! The writer only ever adds relationships, so identifiers are handed out in
//! insertion order: `rId1`, `rId2`, ... Templates rely on that order when they
//! hard-code an identifier.

use crate::common::xml::escape_xml;

/// One outgoing relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
}

impl Relationship {
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Target relative to the source part's folder.
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered relationships of one source.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the relationship to `target_ref`, adding it if needed.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(existing) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return existing.r_id.clone();
        }

        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        r_id
    }

    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Markup of the `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.r_id,
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}
