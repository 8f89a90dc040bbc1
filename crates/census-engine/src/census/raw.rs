//! Distinct-color counting.

use std::collections::HashMap;

use crate::color::Rgb;

/// Occurrence count of every distinct color in one image.
///
/// Built once per image from the decoded pixels. Counts are always positive:
/// a color is present as a key if and only if at least one pixel has it.
///
/// # Example
///
/// ```
/// use census_engine::{RawCensus, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// let census = RawCensus::from_pixels([red, red, Rgb::new(0, 0, 255)]);
///
/// assert_eq!(census.len(), 2);
/// assert_eq!(census.count(red), 2);
/// assert_eq!(census.total(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCensus {
    counts: HashMap<Rgb, u64>,
    total: u64,
}

impl RawCensus {
    /// Count the given pixels.
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = Rgb>,
    {
        let mut counts: HashMap<Rgb, u64> = HashMap::new();
        let mut total = 0u64;
        for pixel in pixels {
            *counts.entry(pixel).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Count pixels packed as `[R, G, B, R, G, B, ...]`.
    ///
    /// This is the layout of an 8-bit RGB image buffer. A trailing partial
    /// triple is ignored.
    pub fn from_rgb_bytes(data: &[u8]) -> Self {
        Self::from_pixels(
            data.chunks_exact(3)
                .map(|px| Rgb::new(px[0], px[1], px[2])),
        )
    }

    /// Build a census from precomputed `(color, count)` pairs.
    ///
    /// Zero counts are dropped and repeated colors are summed.
    pub fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Rgb, u64)>,
    {
        let mut counts: HashMap<Rgb, u64> = HashMap::new();
        let mut total = 0u64;
        for (color, n) in pairs {
            if n == 0 {
                continue;
            }
            *counts.entry(color).or_insert(0) += n;
            total += n;
        }
        Self { counts, total }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no pixel was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (number of pixels represented).
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Occurrences of `color`, zero if absent.
    #[inline]
    pub fn count(&self, color: Rgb) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// True if at least one pixel has `color`.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.counts.contains_key(&color)
    }

    /// `(color, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, u64)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Distinct colors in unspecified order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.counts.keys().copied()
    }

    /// Keep only the colors for which `keep` returns true.
    pub(crate) fn retain_colors<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(Rgb) -> bool,
    {
        let counts: HashMap<Rgb, u64> = self
            .counts
            .iter()
            .filter(|&(&c, _)| keep(c))
            .map(|(&c, &n)| (c, n))
            .collect();
        let total = counts.values().sum();
        Self { counts, total }
    }
}

impl FromIterator<Rgb> for RawCensus {
    fn from_iter<T: IntoIterator<Item = Rgb>>(iter: T) -> Self {
        Self::from_pixels(iter)
    }
}
