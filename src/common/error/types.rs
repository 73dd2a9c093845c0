//! Unified error types for figdeck.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for figdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input directory does not exist
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Image decoding, normalization or encoding failed
    #[error(transparent)]
    Image(#[from] crate::images::ImageError),

    /// Layout could not be computed
    #[error(transparent)]
    Layout(#[from] crate::layout::LayoutError),

    /// Presentation package could not be written
    #[error("Presentation error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for figdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
