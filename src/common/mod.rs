//! Errors, EMU arithmetic and XML helpers used by every layer.

pub mod error;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
