/// Error types for grid layout.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("support only a maximum of {max} images per slide, got {count}")]
    TooManyImages { count: usize, max: usize },

    #[error("image count {count} does not match {ratios} aspect ratios")]
    CountMismatch { count: usize, ratios: usize },

    #[error("invalid aspect ratio {ratio} for image {index}")]
    InvalidAspectRatio { index: usize, ratio: f64 },

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
