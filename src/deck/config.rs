//! Deck configuration, loadable from YAML.

use crate::common::unit::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::common::{Error, Result};
use crate::images::ConvertOptions;
use crate::images::decode::BITMAP_EXTENSIONS;
use crate::layout::{Canvas, LayoutConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings of the TIFF conversion pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub enabled: bool,
    /// Extension of the converted files
    pub target_ext: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_ext: BITMAP_EXTENSIONS[0].to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            target_ext: self.target_ext.clone(),
        }
    }
}

/// Everything needed to build one deck.
///
/// Every field has a default, so a YAML file only needs the keys it changes:
///
/// ```
/// use figdeck::deck::DeckConfig;
///
/// let config = DeckConfig::from_yaml_str("deck_name: results\nkeep_ratio: false\n")?;
/// assert_eq!(config.deck_name, "results");
/// assert!(!config.keep_ratio);
/// assert_eq!(config.title_font_pt, 40.0);
/// # Ok::<(), figdeck::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Base name of the `.pptx` file
    pub deck_name: String,
    pub keep_ratio: bool,
    pub canvas: Canvas,
    /// Placeholder text of the title slide
    pub title_text: String,
    pub title_font_pt: f64,
    pub caption_font_pt: f64,
    pub number_font_pt: f64,
    /// Image extensions picked up in each subfolder, lower case
    pub extensions: Vec<String>,
    pub sort_by_name: bool,
    pub conversion: ConversionConfig,
    pub layout: LayoutConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            deck_name: "ppt_name".to_string(),
            keep_ratio: true,
            canvas: Canvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            title_text: "add title here".to_string(),
            title_font_pt: 40.0,
            caption_font_pt: 13.0,
            number_font_pt: 13.0,
            extensions: BITMAP_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            sort_by_name: true,
            conversion: ConversionConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse YAML configuration: {}", e)))
    }

    /// Read and parse a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration to YAML: {}", e)))
    }

    /// Path of the deck file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pptx", self.deck_name))
    }

    /// Reject settings that cannot produce a deck.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width <= 0 || self.canvas.height <= 0 {
            return Err(Error::Config(format!(
                "canvas must be positive, got {} x {}",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.deck_name.trim().is_empty() {
            return Err(Error::Config("deck name must not be empty".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(Error::Config("extension list must not be empty".to_string()));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|ext| !BITMAP_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        {
            return Err(Error::Config(format!(
                "extension {ext:?} cannot be embedded in a deck, expected one of {BITMAP_EXTENSIONS:?}"
            )));
        }
        for (name, size) in [
            ("title_font_pt", self.title_font_pt),
            ("caption_font_pt", self.caption_font_pt),
            ("number_font_pt", self.number_font_pt),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(Error::Config(format!("{name} must be positive, got {size}")));
            }
        }
        if self.conversion.enabled && self.conversion.target_ext.trim().is_empty() {
            return Err(Error::Config(
                "conversion target extension must not be empty".to_string(),
            ));
        }
        self.layout.validate()?;
        Ok(())
    }
}
