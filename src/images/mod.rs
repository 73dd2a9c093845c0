//! Image normalization.
//!
//! Figures come in as ordinary bitmaps or as scientific TIFFs (16-bit or
//! float, possibly multi-channel). This module decodes them into a
//! channel-first [`Raster`], reduces channels, rescales the dynamic range and
//! writes an 8-bit result the slide deck can embed.
//!
//! # Architecture
//!
//! - `raster`: channel-first sample buffers tagged by numeric type
//! - `decode`: extension-dispatched decoding (`open_image`)
//! - `scale`: dynamic-range normalization (`scale_image`)
//! - `encode`: type-dependent output coercion and writing (`save_image`)
//! - `convert`: the TIFF conversion pass over an input tree
//!
//! # Example
//!
//! ```no_run
//! use figdeck::images::{open_image, save_image};
//! use std::path::Path;
//!
//! let raster = open_image(Path::new("stack.tif"), true)?.to_f32();
//! save_image(Path::new("stack.png"), &raster, true)?;
//! # Ok::<(), figdeck::images::ImageError>(())
//! ```

pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod raster;
pub mod scale;

pub use convert::{ConversionReport, ConvertOptions, convert_scientific_images};
pub use decode::{image_dimensions, open_image};
pub use encode::{OutputImage, coerce_to_output, save_image};
pub use error::ImageError;
pub use raster::{Raster, SampleType, Samples};
pub use scale::scale_image;
