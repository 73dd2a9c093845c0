//! figdeck - paste figure folders into a PowerPoint deck
//!
//! Given a directory whose subfolders each hold a handful of figures, figdeck
//! writes a `.pptx` deck with one slide per subfolder. Each slide carries the
//! folder name as its title, the figures laid out in a fixed grid (up to 8
//! per slide), the file name under every figure and a slide number.
//!
//! Scientific TIFF images (16-bit or float, possibly multi-channel) are first
//! normalized to 8-bit single-channel bitmaps next to the originals.
//!
//! # Example
//!
//! ```no_run
//! use figdeck::deck::{DeckAssembler, DeckConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckConfig {
//!     input_dir: "figures".into(),
//!     output_dir: "decks".into(),
//!     deck_name: "weekly".to_string(),
//!     ..Default::default()
//! };
//! let report = DeckAssembler::from_config(config).run()?;
//! println!("Saved {} slides to {}", report.slides, report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Laying out figures by hand
//!
//! ```
//! use figdeck::layout::{Canvas, layout};
//!
//! let placements = layout(2, &[1.0, 1.0], Canvas::default(), false)?;
//! assert_eq!(placements[0].rect.left, 1_125_855);
//! assert_eq!(placements[1].rect.left, 4_674_870);
//! # Ok::<(), figdeck::layout::LayoutError>(())
//! ```

/// Shared error type, units and XML helpers
pub mod common;

/// Decoding, dynamic-range scaling and re-encoding of figures
pub mod images;

/// Grid placement of figures on a slide
pub mod layout;

/// Deck configuration, figure discovery and slide assembly
pub mod deck;

/// Minimal PPTX writer
///
/// This module writes Office Open XML presentations: the OPC package layer
/// plus the PresentationML parts needed for titled slides with pictures and
/// text boxes.
pub mod ooxml;

pub use common::{Error, Result};
