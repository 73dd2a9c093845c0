//! PowerPoint (.pptx) presentation writer.
//!
//! Presentations are built in memory and serialized through the OPC layer:
//!
//! - `MutablePresentation`: slide list and slide size
//! - `MutableSlide`: title placeholder plus free shapes
//! - `MutableShape`: text boxes and pictures
//!
//! Every package carries one slide master with a "Title Slide" and a
//! "Title Only" layout, and a default Office theme.

pub mod format;
pub mod template;
pub mod writer;

pub use format::{ImageFormat, TextFormat};
pub use writer::{MutablePresentation, MutableShape, MutableSlide, SlideLayout};
