//! Unified error types for figdeck.
//!
//! Each layer (image normalization, layout, package writing) has its own error
//! enum; this module folds them into one type for the deck assembler and the CLI.

pub mod conversions;
pub mod types;

pub use types::{Error, Result};
