//! Errors raised while building or writing a presentation.

use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    #[error("package error: {0}")]
    Opc(#[from] OpcError),

    /// Markup could not be generated, or its inputs are inconsistent
    #[error("cannot generate XML: {0}")]
    Xml(String),

    /// Picture bytes are not in a format a slide can embed
    #[error("unsupported picture data: {0}")]
    UnsupportedImage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
