//! Aggregation key.

use std::fmt;

use crate::color::Rgb;

/// The key an observed color is counted under.
///
/// Without a palette every distinct color is its own key
/// ([`ColorKey::Original`]); with a palette colors collapse onto the label
/// of their nearest entry ([`ColorKey::Label`]). The variants stay distinct
/// even when a label happens to read like `"R G B"` text; the two only meet
/// as strings at the serialization boundary, via [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorKey {
    /// An unquantized color
    Original(Rgb),
    /// A reference palette label
    Label(String),
}

impl ColorKey {
    /// True for palette labels.
    #[inline]
    pub fn is_label(&self) -> bool {
        matches!(self, ColorKey::Label(_))
    }
}

/// `"R G B"` for original colors, the label itself otherwise.
impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorKey::Original(color) => write!(f, "{}", color),
            ColorKey::Label(label) => f.write_str(label),
        }
    }
}

impl From<Rgb> for ColorKey {
    fn from(color: Rgb) -> Self {
        ColorKey::Original(color)
    }
}
