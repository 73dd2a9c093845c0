//! Grid placement of up to eight figures on one slide.
//!
//! The number of images selects a tier, which fixes the cell height and the
//! number of rows. Each row is centered horizontally on the canvas with a
//! fixed gap between cells, and every image gets a caption box along its
//! bottom edge.

use super::config::{Canvas, CaptionWidth, LayoutConfig};
use super::error::{LayoutError, Result};
use crate::common::unit::fraction_of;
use log::{debug, warn};

/// Axis-aligned rectangle in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Whether the interiors of two rectangles intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Where one image and its caption go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub caption: Rect,
}

/// Layout rule set selected by image count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 1 or 2 images, one row
    OneTwo,
    /// 3 images, one row
    Three,
    /// 4 images, one row
    Four,
    /// 5 or more images, two rows
    TwoRows,
}

impl Tier {
    /// Tier for a non-zero image count.
    pub fn for_count(count: usize) -> Option<Tier> {
        match count {
            0 => None,
            1 | 2 => Some(Tier::OneTwo),
            3 => Some(Tier::Three),
            4 => Some(Tier::Four),
            _ => Some(Tier::TwoRows),
        }
    }

    /// Cell height as a fraction of the canvas height.
    fn height_fraction(&self, config: &LayoutConfig) -> f64 {
        match self {
            Tier::OneTwo => config.height_one_two,
            Tier::Three => config.height_three,
            Tier::Four | Tier::TwoRows => config.height_four_plus,
        }
    }

    /// Top of the first row as a fraction of the canvas height.
    fn top_fraction(&self, config: &LayoutConfig) -> f64 {
        match self {
            Tier::TwoRows => config.two_row_top,
            _ => config.single_row_top,
        }
    }
}

/// Grid layout engine with fixed proportions.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place one image per aspect ratio (width / height), in input order.
    ///
    /// With `keep_ratio` off every image fills a square cell. With it on,
    /// landscape images keep the cell width and shrink in height, while
    /// portrait and square images keep the cell height and shrink in width.
    pub fn layout(
        &self,
        aspect_ratios: &[f64],
        canvas: Canvas,
        keep_ratio: bool,
    ) -> Result<Vec<Placement>> {
        let count = aspect_ratios.len();
        let Some(tier) = Tier::for_count(count) else {
            warn!("no images to lay out");
            return Ok(Vec::new());
        };

        if count > self.config.max_images {
            return Err(LayoutError::TooManyImages {
                count,
                max: self.config.max_images,
            });
        }

        if let Some((index, &ratio)) = aspect_ratios
            .iter()
            .enumerate()
            .find(|(_, r)| !r.is_finite() || **r <= 0.0)
        {
            return Err(LayoutError::InvalidAspectRatio { index, ratio });
        }

        let cell = fraction_of(canvas.height, tier.height_fraction(&self.config));
        let spacing = fraction_of(canvas.height, self.config.spacing);
        let first_top = fraction_of(canvas.height, tier.top_fraction(&self.config));
        debug!("layout tier {tier:?} for {count} images, cell {cell} EMU");

        let rows: Vec<&[f64]> = match tier {
            Tier::TwoRows => aspect_ratios.chunks(self.config.max_per_row).collect(),
            _ => vec![aspect_ratios],
        };

        let placements: Vec<Placement> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, ratios)| {
                let top = first_top + row as i64 * (cell + spacing);
                let sizes: Vec<(i64, i64)> = ratios
                    .iter()
                    .map(|&ratio| cell_size(cell, ratio, keep_ratio))
                    .collect();
                self.place_row(&sizes, top, cell, spacing, canvas)
            })
            .collect();

        for placement in &placements {
            debug!("placed {:?}", placement.rect);
        }
        Ok(placements)
    }

    /// Lay out one row of `(width, height)` sizes, centered on the canvas.
    fn place_row(
        &self,
        sizes: &[(i64, i64)],
        top: i64,
        cell: i64,
        spacing: i64,
        canvas: Canvas,
    ) -> Vec<Placement> {
        let gaps = sizes.len().saturating_sub(1) as i64;
        let total: i64 = sizes.iter().map(|&(w, _)| w).sum::<i64>() + spacing * gaps;
        let first_left = (canvas.width - total).div_euclid(2);

        let (placements, _) = sizes.iter().fold(
            (Vec::with_capacity(sizes.len()), first_left),
            |(mut acc, left), &(width, height)| {
                let rect = Rect::new(left, top, width, height);
                acc.push(Placement {
                    rect,
                    caption: self.caption_for(&rect, cell, spacing, canvas),
                });
                (acc, left + width + spacing)
            },
        );
        placements
    }

    fn caption_for(&self, rect: &Rect, cell: i64, spacing: i64, canvas: Canvas) -> Rect {
        let inset = fraction_of(canvas.height, self.config.caption_inset);
        let width = match self.config.caption_width {
            CaptionWidth::ImageWidth => rect.width,
            CaptionWidth::ImageHeight => rect.height,
            CaptionWidth::Cell => cell,
        };
        Rect::new(rect.left, rect.bottom() - inset, width, spacing)
    }
}

/// Image size inside a cell of height `cell`.
fn cell_size(cell: i64, ratio: f64, keep_ratio: bool) -> (i64, i64) {
    if !keep_ratio {
        (cell, cell)
    } else if ratio > 1.0 {
        (cell, (cell as f64 / ratio) as i64)
    } else {
        ((cell as f64 * ratio) as i64, cell)
    }
}

/// Lay out `count` images with the default proportions.
///
/// `count` must equal the number of aspect ratios.
pub fn layout(
    count: usize,
    aspect_ratios: &[f64],
    canvas: Canvas,
    keep_ratio: bool,
) -> Result<Vec<Placement>> {
    if count != aspect_ratios.len() {
        return Err(LayoutError::CountMismatch {
            count,
            ratios: aspect_ratios.len(),
        });
    }
    LayoutEngine::default().layout(aspect_ratios, canvas, keep_ratio)
}
