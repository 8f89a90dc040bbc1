//! Reference quantization
//!
//! Maps every distinct color of a (filtered) census onto its nearest
//! [`ReferencePalette`] entry. Classification runs once per distinct color,
//! never per pixel, so the cost is `distinct colors x palette size`
//! regardless of image size.
//!
//! With the `parallel` feature the distinct colors are classified on the
//! rayon pool. Each color is still matched by the same sequential scan over
//! the palette, so results (including tie-breaks) are identical to the
//! single-threaded path.

mod key;

pub use key::ColorKey;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::census::RawCensus;
use crate::color::Rgb;
use crate::palette::ReferencePalette;

/// A distinct color together with its count and palette assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizedColor {
    /// The observed color
    pub color: Rgb,
    /// Pixels with this color
    pub count: u64,
    /// Index of the nearest palette entry, `None` when not quantized
    pub palette_index: Option<usize>,
}

impl QuantizedColor {
    /// The key this color is aggregated under.
    pub fn key(&self, palette: &ReferencePalette) -> ColorKey {
        match self.palette_index {
            Some(idx) => ColorKey::Label(palette.entry(idx).label.clone()),
            None => ColorKey::Original(self.color),
        }
    }
}

/// Nearest-palette classifier over distinct colors.
///
/// # Example
///
/// ```
/// use census_engine::{ColorKey, Quantizer, RawCensus, ReferencePalette, Rgb};
///
/// let palette = ReferencePalette::new([
///     ("dark", Rgb::new(0, 0, 0)),
///     ("light", Rgb::new(255, 255, 255)),
/// ])
/// .unwrap();
///
/// let quantizer = Quantizer::new(&palette);
/// assert_eq!(
///     quantizer.key_for(Rgb::new(30, 30, 30)),
///     ColorKey::Label("dark".to_string())
/// );
///
/// let census = RawCensus::from_pixels([Rgb::new(250, 250, 250)]);
/// let assigned = quantizer.quantize(&census);
/// assert_eq!(assigned[0].palette_index, Some(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quantizer<'a> {
    palette: &'a ReferencePalette,
}

impl<'a> Quantizer<'a> {
    /// Create a quantizer for `palette`. An empty palette disables quantization.
    pub fn new(palette: &'a ReferencePalette) -> Self {
        Self { palette }
    }

    /// The palette colors are matched against.
    pub fn palette(&self) -> &'a ReferencePalette {
        self.palette
    }

    /// True when colors will be remapped (palette not empty).
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.palette.is_empty()
    }

    /// Palette index for one color, `None` if the palette is empty.
    #[inline]
    pub fn classify(&self, color: Rgb) -> Option<usize> {
        self.palette.find_nearest(color).map(|(idx, _)| idx)
    }

    /// Aggregation key for one color.
    pub fn key_for(&self, color: Rgb) -> ColorKey {
        QuantizedColor {
            color,
            count: 0,
            palette_index: self.classify(color),
        }
        .key(self.palette)
    }

    /// Classify every distinct color of `census`.
    ///
    /// Returns one [`QuantizedColor`] per distinct color, in unspecified
    /// order. With an empty palette every `palette_index` is `None`.
    pub fn quantize(&self, census: &RawCensus) -> Vec<QuantizedColor> {
        let distinct: Vec<(Rgb, u64)> = census.iter().collect();

        if !self.is_active() {
            return distinct
                .into_iter()
                .map(|(color, count)| QuantizedColor {
                    color,
                    count,
                    palette_index: None,
                })
                .collect();
        }

        self.classify_all(distinct)
    }

    #[cfg(feature = "parallel")]
    fn classify_all(&self, distinct: Vec<(Rgb, u64)>) -> Vec<QuantizedColor> {
        distinct
            .into_par_iter()
            .map(|(color, count)| QuantizedColor {
                color,
                count,
                palette_index: self.classify(color),
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn classify_all(&self, distinct: Vec<(Rgb, u64)>) -> Vec<QuantizedColor> {
        distinct
            .into_iter()
            .map(|(color, count)| QuantizedColor {
                color,
                count,
                palette_index: self.classify(color),
            })
            .collect()
    }
}
