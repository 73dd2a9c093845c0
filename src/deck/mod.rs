//! Deck assembly.
//!
//! Walks the figure groups of an input directory, lays out each group's
//! images on its own slide and saves the result as a `.pptx` file.
//!
//! # Example
//!
//! ```no_run
//! use figdeck::deck::{DeckAssembler, DeckConfig};
//!
//! let config = DeckConfig {
//!     input_dir: "figures".into(),
//!     deck_name: "weekly".to_string(),
//!     ..Default::default()
//! };
//! let report = DeckAssembler::from_config(config).run()?;
//! println!("{} slides written to {}", report.slides, report.output.display());
//! # Ok::<(), figdeck::Error>(())
//! ```

pub mod assembler;
pub mod config;
pub mod source;

pub use assembler::{DeckAssembler, DeckReport};
pub use config::{ConversionConfig, DeckConfig};
pub use source::{FigureGroup, FigureSource, FsFigureSource, ImageEntry};
