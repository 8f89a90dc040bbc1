//! Errors raised while building a [`ColorCensus`](crate::ColorCensus) from
//! color text.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Why a census could not be configured.
///
/// # Example
///
/// ```
/// use census_engine::{CensusError, ColorCensus};
///
/// let err = ColorCensus::from_strs(&[("bg", "#FFFFFF")], &["#GG0000"]).unwrap_err();
/// assert!(matches!(err, CensusError::ParseColor(_)));
/// assert!(err.to_string().starts_with("invalid ignored color"));
/// ```
#[derive(Debug)]
pub enum CensusError {
    /// A reference entry has a bad label or color
    Palette(PaletteError),
    /// An ignored color is not valid hex or decimal color text
    ParseColor(ParseColorError),
}

impl fmt::Display for CensusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CensusError::Palette(err) => write!(f, "invalid reference palette: {}", err),
            CensusError::ParseColor(err) => write!(f, "invalid ignored color: {}", err),
        }
    }
}

impl std::error::Error for CensusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CensusError::Palette(err) => Some(err),
            CensusError::ParseColor(err) => Some(err),
        }
    }
}

impl From<PaletteError> for CensusError {
    fn from(err: PaletteError) -> Self {
        CensusError::Palette(err)
    }
}

impl From<ParseColorError> for CensusError {
    fn from(err: ParseColorError) -> Self {
        CensusError::ParseColor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorCensus;
    use std::error::Error;

    #[test]
    fn test_duplicate_reference_message() {
        let err = ColorCensus::from_strs(&[("bg", "#FFF"), ("bg", "#000")], &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid reference palette: duplicate reference label 'bg' at index 1"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_bad_ignored_color_message() {
        let err = ColorCensus::from_strs(&[], &["1 2"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid ignored color: expected 3 color channels, found 2"
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "expected 3 color channels, found 2");
    }
}
