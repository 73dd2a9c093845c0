//! Batch conversion of scientific TIFF images into slide-friendly bitmaps.

use super::decode::{is_tiff, open_image};
use super::encode::save_image;
use super::error::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options for [`convert_scientific_images`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Extension of the converted files, which also selects the encoder
    pub target_ext: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            target_ext: "png".to_string(),
        }
    }
}

/// Outcome of a conversion pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Files written during this pass
    pub converted: Vec<PathBuf>,
    /// Targets that already existed and were left untouched
    pub skipped: Vec<PathBuf>,
}

/// Convert every TIFF under `root` into `{stem}.{target_ext}` next to it.
///
/// Each image is reduced to its first channel, cast to float and rescaled to
/// 8 bits. Existing targets are never overwritten, so running the pass twice
/// converts nothing the second time.
pub fn convert_scientific_images(root: &Path, options: &ConvertOptions) -> Result<ConversionReport> {
    info!("Converting tif and tiff to {}...", options.target_ext);

    let mut report = ConversionReport::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_tiff(path) {
            continue;
        }

        let target = path.with_extension(&options.target_ext);
        if target.exists() {
            warn!("{} already exists. Conversion skipped!", target.display());
            report.skipped.push(target);
            continue;
        }

        let raster = open_image(path, true).map_err(|e| e.with_path(path))?.to_f32();
        save_image(&target, &raster, true)?;
        report.converted.push(target);
    }

    info!(
        "Conversion done: {} converted, {} skipped",
        report.converted.len(),
        report.skipped.len()
    );
    Ok(report)
}
