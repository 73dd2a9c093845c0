//! Office Open XML (OOXML) presentation writer.
//!
//! Two layers:
//!
//! - `opc`: parts, relationships and the ZIP container
//! - `pptx`: slides, shapes and the built-in slide master
//!
//! # Example
//!
//! ```rust,no_run
//! use figdeck::layout::Rect;
//! use figdeck::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_title("Results");
//! slide.add_text_box("n = 12", Rect::new(914400, 914400, 1828800, 457200));
//! pres.save("results.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
