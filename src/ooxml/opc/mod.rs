//! Open Packaging Conventions, writing side.
//!
//! A package is a set of named parts plus typed relationships between them,
//! stored in a ZIP archive next to a `[Content_Types].xml` index.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
