//! Layout proportions and canvas geometry.

use super::error::{LayoutError, Result};
use crate::common::unit::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawable area of one slide, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Canvas {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

/// How wide the caption under each image is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionWidth {
    /// As wide as the placed image
    #[default]
    ImageWidth,
    /// As wide as the placed image is tall
    ImageHeight,
    /// As wide as the tier's cell height
    Cell,
}

impl CaptionWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptionWidth::ImageWidth => "image-width",
            CaptionWidth::ImageHeight => "image-height",
            CaptionWidth::Cell => "cell",
        }
    }
}

impl fmt::Display for CaptionWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptionWidth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image-width" => Ok(CaptionWidth::ImageWidth),
            "image-height" => Ok(CaptionWidth::ImageHeight),
            "cell" => Ok(CaptionWidth::Cell),
            other => Err(format!(
                "unknown caption width '{other}', expected image-width, image-height or cell"
            )),
        }
    }
}

/// Proportions of the grid, as fractions of the canvas height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Top of the row for 1 to 4 images
    pub single_row_top: f64,
    /// Top of the first row for 5 or more images
    pub two_row_top: f64,
    /// Cell height for 1 or 2 images
    pub height_one_two: f64,
    /// Cell height for 3 images
    pub height_three: f64,
    /// Cell height for 4 or more images
    pub height_four_plus: f64,
    /// Horizontal gap, row gap and caption height
    pub spacing: f64,
    /// Captions start this far above the image bottom
    pub caption_inset: f64,
    pub max_per_row: usize,
    pub max_images: usize,
    pub caption_width: CaptionWidth,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            single_row_top: 0.25,
            two_row_top: 0.18,
            height_one_two: 0.65,
            height_three: 0.5,
            height_four_plus: 0.37,
            spacing: 0.04,
            caption_inset: 0.01,
            max_per_row: 4,
            max_images: 8,
            caption_width: CaptionWidth::ImageWidth,
        }
    }
}

impl LayoutConfig {
    /// Check that every fraction lies in `(0, 1]` and the row limits fit the tiers.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("single_row_top", self.single_row_top),
            ("two_row_top", self.two_row_top),
            ("height_one_two", self.height_one_two),
            ("height_three", self.height_three),
            ("height_four_plus", self.height_four_plus),
            ("spacing", self.spacing),
            ("caption_inset", self.caption_inset),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }

        if self.max_per_row < 4 {
            return Err(LayoutError::InvalidConfig(format!(
                "max_per_row must be at least 4, got {}",
                self.max_per_row
            )));
        }
        if self.max_images == 0 || self.max_images > 2 * self.max_per_row {
            return Err(LayoutError::InvalidConfig(format!(
                "max_images must be between 1 and {}, got {}",
                2 * self.max_per_row,
                self.max_images
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert_eq!(Canvas::default(), Canvas::new(9_144_000, 5_143_500));
    }

    #[test]
    fn test_validate_rejects_bad_fractions() {
        let config = LayoutConfig {
            spacing: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfig(_))
        ));

        let config = LayoutConfig {
            height_three: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_limits() {
        let config = LayoutConfig {
            max_images: 9,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            max_per_row: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_caption_width_parse() {
        assert_eq!("cell".parse::<CaptionWidth>(), Ok(CaptionWidth::Cell));
        assert_eq!(
            "Image-Height".parse::<CaptionWidth>(),
            Ok(CaptionWidth::ImageHeight)
        );
        assert!("wide".parse::<CaptionWidth>().is_err());
        assert_eq!(CaptionWidth::ImageWidth.to_string(), "image-width");
    }
}
