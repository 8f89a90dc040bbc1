//! Reference palette types and utilities
//!
//! This module provides the ordered [`ReferencePalette`] used for
//! quantization, plus error types for color parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{PaletteEntry, ReferencePalette};
