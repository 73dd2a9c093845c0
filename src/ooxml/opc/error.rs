//! Errors raised while assembling or writing a package.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Invalid part name: '{0}'")]
    InvalidPackUri(String),

    #[error("No part named {0} in the package")]
    PartNotFound(String),

    #[error("Part {0} was added twice")]
    DuplicatePart(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
