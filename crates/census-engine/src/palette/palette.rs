//! Ordered reference palette with nearest-color matching.
//!
//! A [`ReferencePalette`] is the small, caller-supplied set of named target
//! colors that observed colors are collapsed onto. Entry order is part of the
//! palette's meaning: it decides which label wins when two entries are
//! equally close to a color.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// One named palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Unique label reported in place of the matched colors
    pub label: String,
    /// Target color
    pub color: Rgb,
}

/// A named, ordered set of reference colors.
///
/// Entries keep the order they were supplied in. Labels must be unique and
/// non-empty; colors may repeat, in which case the earlier entry always wins
/// the match.
///
/// An empty palette is valid and means "do not quantize".
///
/// # Example
///
/// ```
/// use census_engine::{ReferencePalette, Rgb};
///
/// let palette = ReferencePalette::new([
///     ("warm", Rgb::new(255, 0, 0)),
///     ("cool", Rgb::new(0, 0, 255)),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.get("cool"), Some(Rgb::new(0, 0, 255)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencePalette {
    entries: Vec<PaletteEntry>,
}

impl ReferencePalette {
    /// Create a palette from `(label, color)` pairs, in tie-break order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyLabel`] if a label is blank
    /// - [`PaletteError::DuplicateLabel`] if a label appears twice
    pub fn new<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for (index, (label, color)) in entries.into_iter().enumerate() {
            let label = label.into();
            if label.trim().is_empty() {
                return Err(PaletteError::EmptyLabel { index });
            }
            if !seen.insert(label.clone()) {
                return Err(PaletteError::DuplicateLabel { label, index });
            }
            out.push(PaletteEntry { label, color });
        }

        Ok(Self { entries: out })
    }

    /// A palette with no entries (quantization disabled).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a palette from `(label, color text)` pairs.
    ///
    /// Color text accepts anything [`Rgb::from_str`] does (hex or `"R G B"`).
    ///
    /// # Example
    ///
    /// ```
    /// use census_engine::ReferencePalette;
    ///
    /// let palette = ReferencePalette::from_strs(&[
    ///     ("background", "#FFFFFF"),
    ///     ("part", "200 30 30"),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_strs(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let parsed = entries
            .iter()
            .map(|(label, color)| Ok((*label, Rgb::from_str(color)?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(parsed)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the palette has no entries and quantization is skipped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Entry at `idx`.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Color registered under `label`.
    pub fn get(&self, label: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.color)
    }

    /// Find the palette entry nearest to `color` under Euclidean distance.
    ///
    /// Returns `(index, distance)`, or `None` for an empty palette.
    ///
    /// Candidates are scanned in definition order and only a strictly smaller
    /// distance replaces the current best, so equidistant entries resolve to
    /// the one defined first.
    ///
    /// # Example
    ///
    /// ```
    /// use census_engine::{ReferencePalette, Rgb};
    ///
    /// let palette = ReferencePalette::new([
    ///     ("warm", Rgb::new(255, 0, 0)),
    ///     ("cool", Rgb::new(0, 0, 255)),
    /// ])
    /// .unwrap();
    ///
    /// // Green is exactly as far from red as from blue: first entry wins
    /// let (idx, _) = palette.find_nearest(Rgb::new(0, 255, 0)).unwrap();
    /// assert_eq!(palette.entry(idx).label, "warm");
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> Option<(usize, f64)> {
        // Linear scan - palettes are small
        let mut best: Option<(usize, f64)> = None;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color.distance(entry.color);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        best
    }
}
