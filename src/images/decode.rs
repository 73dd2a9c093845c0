//! Decoding image files into rasters.

use super::error::{ImageError, Result};
use super::raster::{Raster, Samples, planar};
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;

/// Extensions decoded by the generic decoder.
pub const BITMAP_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Extensions decoded by the TIFF path.
pub const TIFF_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Lower-cased extension of a path, if any.
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Whether the path names a TIFF file.
pub fn is_tiff(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| TIFF_EXTENSIONS.contains(&ext.as_str()))
}

/// Decode the first page of a TIFF file.
///
/// 8-bit data is widened to 16 bits and wider or signed integers are cast to
/// 16 bits. Float data stays float.
fn decode_tiff(path: &Path) -> Result<Raster> {
    let tiff_err = |source: tiff::TiffError| ImageError::Tiff {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| ImageError::from(e).with_path(path))?;
    let mut decoder = Decoder::new(BufReader::new(file)).map_err(tiff_err)?;
    let (width, height) = decoder.dimensions().map_err(tiff_err)?;
    let channels = decoder
        .find_tag_unsigned::<u16>(Tag::SamplesPerPixel)
        .map_err(tiff_err)?
        .unwrap_or(1) as usize;

    let samples = match decoder.read_image().map_err(tiff_err)? {
        DecodingResult::U8(v) => Samples::U8(planar(&v, channels)),
        DecodingResult::U16(v) => Samples::U16(planar(&v, channels)),
        DecodingResult::U32(v) => Samples::U16(cast_u16(&v, channels, |x| x as u16)),
        DecodingResult::U64(v) => Samples::U16(cast_u16(&v, channels, |x| x as u16)),
        DecodingResult::I8(v) => Samples::U16(cast_u16(&v, channels, |x| x as u16)),
        DecodingResult::I16(v) => Samples::U16(cast_u16(&v, channels, |x| x as u16)),
        DecodingResult::I32(v) => Samples::U16(cast_u16(&v, channels, |x| x as u16)),
        DecodingResult::I64(v) => Samples::U16(cast_u16(&v, channels, |x| x as u16)),
        DecodingResult::F32(v) => Samples::F32(planar(&v, channels)),
        DecodingResult::F64(v) => Samples::F64(planar(&v, channels)),
        #[allow(unreachable_patterns)]
        _ => return Err(ImageError::UnsupportedTiffSamples(path.to_path_buf())),
    };

    Ok(Raster::new(channels, height as usize, width as usize, samples)?.widen_to_u16())
}

fn cast_u16<T: Copy>(interleaved: &[T], channels: usize, cast: impl Fn(T) -> u16) -> Vec<u16> {
    planar(interleaved, channels).into_iter().map(cast).collect()
}

/// Decode an image file into a channel-first raster.
///
/// TIFF files keep their 16-bit depth; 8-bit and wider integer TIFF data is
/// brought to 16 bits and float data stays float. Only the first page of a multi-page TIFF is
/// read. When `reduce_channels` is set, multi-channel images keep their first
/// channel only.
pub fn open_image(path: &Path, reduce_channels: bool) -> Result<Raster> {
    let ext = extension_of(path).unwrap_or_default();

    let raster = if TIFF_EXTENSIONS.contains(&ext.as_str()) {
        decode_tiff(path)?
    } else if BITMAP_EXTENSIONS.contains(&ext.as_str()) {
        let decoded = image::ImageReader::open(path)
            .map_err(|e| ImageError::from(e).with_path(path))?
            .decode()
            .map_err(|source| ImageError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Raster::from_dynamic(decoded)
    } else {
        return Err(ImageError::UnsupportedExtension(path.to_path_buf()));
    };

    debug!(
        "decoded {}: shape {:?}, {}",
        path.display(),
        raster.shape(),
        raster.sample_type()
    );

    if raster.ndim() == 3 && reduce_channels {
        warn!("3-channel image. Using first channel.");
        return Ok(raster.first_channel());
    }

    Ok(raster)
}

/// Read pixel dimensions `(width, height)` without decoding the whole image.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
