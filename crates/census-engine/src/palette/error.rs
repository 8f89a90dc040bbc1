//! Error types for palette operations
//!
//! This module provides error types for color parsing and reference palette
//! validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing color strings.
///
/// Returned by [`Rgb::from_str`](crate::Rgb) when text is neither valid hex
/// nor three decimal channels.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
    /// Decimal form did not contain exactly three channels
    ComponentCount(usize),
    /// Decimal channel is not an integer in 0..=255
    InvalidChannel(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::ComponentCount(n) => {
                write!(f, "expected 3 color channels, found {}", n)
            }
            ParseColorError::InvalidChannel(err) => {
                write!(f, "invalid color channel (expected 0-255): {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) | ParseColorError::InvalidChannel(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for reference palette validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// The same label was defined twice
    DuplicateLabel {
        /// The repeated label
        label: String,
        /// Position of the second definition
        index: usize,
    },
    /// A label was empty or whitespace only
    EmptyLabel {
        /// Position of the offending entry
        index: usize,
    },
    /// Invalid color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::DuplicateLabel { label, index } => {
                write!(f, "duplicate reference label '{}' at index {}", label, index)
            }
            PaletteError::EmptyLabel { index } => {
                write!(f, "empty reference label at index {}", index)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
