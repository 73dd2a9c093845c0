//! Coercing rasters to an encodable form and writing them out.

use super::error::{ImageError, Result};
use super::raster::{Raster, Samples, interleaved};
use super::scale::{scale_image, to_u8_levels};
use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma, RgbImage, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// A raster converted to something the encoders accept.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputImage {
    /// 8-bit image, encoded in the format implied by the output extension
    Bitmap(DynamicImage),
    /// 16-bit single-channel image, always TIFF-encoded
    Tiff16(ImageBuffer<Luma<u16>, Vec<u16>>),
}

impl OutputImage {
    /// Encode to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let encode_err = |source| ImageError::Encode {
            path: path.to_path_buf(),
            source,
        };
        match self {
            OutputImage::Bitmap(image) => image.save(path).map_err(encode_err)?,
            OutputImage::Tiff16(buffer) => {
                let file = File::create(path).map_err(|e| ImageError::from(e).with_path(path))?;
                DynamicImage::ImageLuma16(buffer.clone())
                    .write_to(&mut BufWriter::new(file), ImageFormat::Tiff)
                    .map_err(encode_err)?;
            },
        }
        Ok(())
    }
}

fn unsupported(raster: &Raster) -> ImageError {
    ImageError::UnsupportedType {
        sample_type: raster.sample_type(),
        ndim: raster.ndim(),
        path: PathBuf::new(),
    }
}

fn shape_error(raster: &Raster) -> ImageError {
    let (channels, height, width) = raster.shape();
    ImageError::ShapeMismatch {
        expected: channels * height * width,
        actual: raster.samples().len(),
    }
}

/// Decide how a raster is written.
///
/// - 8-bit single channel: rescaled to the full `0..=255` range when `scale`
///   is set, otherwise kept as is.
/// - 8-bit with 3 or 4 channels: kept as is (RGB/RGBA).
/// - 16-bit single channel: kept as is, TIFF-encoded.
/// - float single channel: rescaled to `0..=255`.
///
/// Every other type and shape is [`ImageError::UnsupportedType`].
pub fn coerce_to_output(raster: &Raster, scale: bool) -> Result<OutputImage> {
    let width = raster.width() as u32;
    let height = raster.height() as u32;

    let image = match (raster.samples(), raster.channels()) {
        (Samples::U8(pixels), 1) => {
            let pixels = if scale {
                to_u8_levels(&scale_image(pixels))
            } else {
                pixels.clone()
            };
            GrayImage::from_raw(width, height, pixels).map(DynamicImage::ImageLuma8)
        },
        (Samples::U8(pixels), 3) => {
            RgbImage::from_raw(width, height, interleaved(pixels, 3)).map(DynamicImage::ImageRgb8)
        },
        (Samples::U8(pixels), 4) => RgbaImage::from_raw(width, height, interleaved(pixels, 4))
            .map(DynamicImage::ImageRgba8),
        (Samples::U16(pixels), 1) => {
            return ImageBuffer::from_raw(width, height, pixels.clone())
                .map(OutputImage::Tiff16)
                .ok_or_else(|| shape_error(raster));
        },
        (Samples::F32(pixels), 1) => {
            GrayImage::from_raw(width, height, to_u8_levels(&scale_image(pixels)))
                .map(DynamicImage::ImageLuma8)
        },
        _ => return Err(unsupported(raster)),
    };

    image
        .map(OutputImage::Bitmap)
        .ok_or_else(|| shape_error(raster))
}

/// Write a raster to `path`, see [`coerce_to_output`] for the accepted types.
pub fn save_image(path: &Path, raster: &Raster, scale: bool) -> Result<()> {
    coerce_to_output(raster, scale)
        .map_err(|e| e.with_path(path))?
        .save(path)
}
