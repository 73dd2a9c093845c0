//! Slide grid layout.
//!
//! Given the aspect ratios of up to eight figures and the canvas size, the
//! engine computes where each figure and its caption go. All geometry is in
//! EMUs and derived from fractions of the canvas height.

pub mod config;
pub mod error;
pub mod grid;

pub use config::{Canvas, CaptionWidth, LayoutConfig};
pub use error::LayoutError;
pub use grid::{LayoutEngine, Placement, Rect, Tier, layout};
