//! Channel-first pixel buffers.
//!
//! A [`Raster`] holds `channels` planes of `height × width` samples each, one
//! plane after another. The `image` crate hands out interleaved pixels, so
//! conversion in both directions lives here as well.

use super::error::{ImageError, Result};
use image::DynamicImage;
use std::fmt;

/// Numeric type of the samples in a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    U8,
    U16,
    F32,
    F64,
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleType::U8 => "uint8",
            SampleType::U16 => "uint16",
            SampleType::F32 => "float32",
            SampleType::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// Sample storage, tagged by numeric type.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::U16(v) => v.len(),
            Samples::F32(v) => v.len(),
            Samples::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample_type(&self) -> SampleType {
        match self {
            Samples::U8(_) => SampleType::U8,
            Samples::U16(_) => SampleType::U16,
            Samples::F32(_) => SampleType::F32,
            Samples::F64(_) => SampleType::F64,
        }
    }

    /// Keep the first `count` samples.
    fn truncated(&self, count: usize) -> Samples {
        match self {
            Samples::U8(v) => Samples::U8(v[..count].to_vec()),
            Samples::U16(v) => Samples::U16(v[..count].to_vec()),
            Samples::F32(v) => Samples::F32(v[..count].to_vec()),
            Samples::F64(v) => Samples::F64(v[..count].to_vec()),
        }
    }
}

/// A decoded image with channel-first layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    channels: usize,
    height: usize,
    width: usize,
    samples: Samples,
}

impl Raster {
    /// Create a raster, checking that the sample count matches the shape.
    pub fn new(channels: usize, height: usize, width: usize, samples: Samples) -> Result<Self> {
        let expected = channels * height * width;
        if channels == 0 || samples.len() != expected {
            return Err(ImageError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            channels,
            height,
            width,
            samples,
        })
    }

    /// Single-channel 8-bit raster.
    pub fn gray8(height: usize, width: usize, pixels: Vec<u8>) -> Result<Self> {
        Self::new(1, height, width, Samples::U8(pixels))
    }

    /// `(channels, height, width)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.channels, self.height, self.width)
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// 2 for single-channel rasters, 3 otherwise.
    pub fn ndim(&self) -> usize {
        if self.channels == 1 { 2 } else { 3 }
    }

    pub fn sample_type(&self) -> SampleType {
        self.samples.sample_type()
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// The first plane as a single-channel raster.
    pub fn first_channel(&self) -> Raster {
        Raster {
            channels: 1,
            height: self.height,
            width: self.width,
            samples: self.samples.truncated(self.height * self.width),
        }
    }

    /// Cast every sample to `f32`.
    pub fn to_f32(&self) -> Raster {
        let samples = match &self.samples {
            Samples::U8(v) => v.iter().map(|&s| s as f32).collect(),
            Samples::U16(v) => v.iter().map(|&s| s as f32).collect(),
            Samples::F32(v) => v.clone(),
            Samples::F64(v) => v.iter().map(|&s| s as f32).collect(),
        };
        Raster {
            samples: Samples::F32(samples),
            ..*self
        }
    }

    /// Widen 8-bit samples to 16 bits; other types are returned unchanged.
    pub fn widen_to_u16(self) -> Raster {
        let Raster {
            channels,
            height,
            width,
            samples,
        } = self;
        let samples = match samples {
            Samples::U8(v) => Samples::U16(v.into_iter().map(u16::from).collect()),
            other => other,
        };
        Raster {
            channels,
            height,
            width,
            samples,
        }
    }

    /// Build a raster from a decoded image.
    pub fn from_dynamic(image: DynamicImage) -> Raster {
        let height = image.height() as usize;
        let width = image.width() as usize;

        let (channels, samples) = match image {
            DynamicImage::ImageLuma8(buf) => (1, Samples::U8(buf.into_raw())),
            DynamicImage::ImageLumaA8(buf) => (2, Samples::U8(planar(&buf.into_raw(), 2))),
            DynamicImage::ImageRgb8(buf) => (3, Samples::U8(planar(&buf.into_raw(), 3))),
            DynamicImage::ImageRgba8(buf) => (4, Samples::U8(planar(&buf.into_raw(), 4))),
            DynamicImage::ImageLuma16(buf) => (1, Samples::U16(buf.into_raw())),
            DynamicImage::ImageLumaA16(buf) => (2, Samples::U16(planar(&buf.into_raw(), 2))),
            DynamicImage::ImageRgb16(buf) => (3, Samples::U16(planar(&buf.into_raw(), 3))),
            DynamicImage::ImageRgba16(buf) => (4, Samples::U16(planar(&buf.into_raw(), 4))),
            DynamicImage::ImageRgb32F(buf) => (3, Samples::F32(planar(&buf.into_raw(), 3))),
            DynamicImage::ImageRgba32F(buf) => (4, Samples::F32(planar(&buf.into_raw(), 4))),
            other => (4, Samples::U8(planar(&other.to_rgba8().into_raw(), 4))),
        };

        Raster {
            channels,
            height,
            width,
            samples,
        }
    }
}

/// Convert interleaved pixels (`HWC`) to channel-first planes (`CHW`).
pub(crate) fn planar<T: Copy>(interleaved: &[T], channels: usize) -> Vec<T> {
    if channels == 1 {
        return interleaved.to_vec();
    }
    (0..channels)
        .flat_map(|c| interleaved.iter().skip(c).step_by(channels).copied())
        .collect()
}

/// Convert channel-first planes (`CHW`) back to interleaved pixels (`HWC`).
pub(crate) fn interleaved<T: Copy>(planes: &[T], channels: usize) -> Vec<T> {
    if channels <= 1 {
        return planes.to_vec();
    }
    let plane_len = planes.len() / channels;
    (0..plane_len)
        .flat_map(|i| (0..channels).map(move |c| planes[c * plane_len + i]))
        .collect()
}
