//! Building slides in memory and packaging them.

pub mod package;
pub mod pres;
pub mod shape;
pub mod slide;

pub use pres::MutablePresentation;
pub use shape::MutableShape;
pub use slide::{MutableSlide, SlideLayout};
