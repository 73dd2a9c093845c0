//! Error types for image decoding, normalization and encoding.
use super::raster::SampleType;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error on {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot decode TIFF {}: {source}", path.display())]
    Tiff {
        path: PathBuf,
        source: tiff::TiffError,
    },

    #[error("Cannot encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Unsupported image extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error(
        "Unsupported file type. Type: {sample_type}  Dim: {ndim}  Filename: {}",
        path.display()
    )]
    UnsupportedType {
        sample_type: SampleType,
        ndim: usize,
        path: PathBuf,
    },

    #[error("Unsupported TIFF sample format in {}", .0.display())]
    UnsupportedTiffSamples(PathBuf),

    #[error("Sample buffer holds {actual} values, shape needs {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl ImageError {
    /// Attach the file the failed operation was working on.
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            ImageError::Io(source) => ImageError::File {
                path: file.to_path_buf(),
                source,
            },
            ImageError::UnsupportedType {
                sample_type, ndim, ..
            } => ImageError::UnsupportedType {
                sample_type,
                ndim,
                path: file.to_path_buf(),
            },
            other => other,
        }
    }

    /// File named by the error, if it names one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ImageError::File { path, .. }
            | ImageError::Decode { path, .. }
            | ImageError::Tiff { path, .. }
            | ImageError::Encode { path, .. }
            | ImageError::UnsupportedType { path, .. }
            | ImageError::UnsupportedTiffSamples(path)
            | ImageError::UnsupportedExtension(path) => Some(path),
            ImageError::Io(_) | ImageError::ShapeMismatch { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_names_the_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ImageError::from(io).with_path(Path::new("group/cells.tif"));
        assert_eq!(err.path(), Some(Path::new("group/cells.tif")));
        assert!(err.to_string().contains("group/cells.tif"));

        let err = ImageError::ShapeMismatch {
            expected: 4,
            actual: 3,
        }
        .with_path(Path::new("x.tif"));
        assert!(err.path().is_none());
    }
}
