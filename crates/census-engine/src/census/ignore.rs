//! Exclusion of caller-specified colors.

use std::collections::HashSet;

use super::raw::RawCensus;
use crate::color::Rgb;

/// Colors excluded from every count.
///
/// Filtering happens before quantization, so an ignored color neither
/// contributes to any palette label nor to the percentage denominator.
///
/// # Example
///
/// ```
/// use census_engine::{IgnoreSet, RawCensus, Rgb};
///
/// let black = Rgb::new(0, 0, 0);
/// let census = RawCensus::from_pixels([black, black, Rgb::new(9, 9, 9)]);
///
/// let filtered = IgnoreSet::from_iter([black]).apply(&census);
/// assert_eq!(filtered.total(), 1);
/// assert!(!filtered.contains(black));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    colors: HashSet<Rgb>,
}

impl IgnoreSet {
    /// An empty set (filtering is the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color; returns false if it was already present.
    pub fn insert(&mut self, color: Rgb) -> bool {
        self.colors.insert(color)
    }

    /// True if `color` is excluded.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Number of excluded colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when nothing is excluded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Excluded colors in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// Return a new census without the excluded colors.
    ///
    /// Counts of surviving colors are unchanged and the total is recomputed
    /// from the survivors.
    pub fn apply(&self, census: &RawCensus) -> RawCensus {
        if self.colors.is_empty() {
            return census.clone();
        }
        census.retain_colors(|c| !self.colors.contains(&c))
    }
}

impl FromIterator<Rgb> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = Rgb>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rgb> for IgnoreSet {
    fn extend<T: IntoIterator<Item = Rgb>>(&mut self, iter: T) {
        self.colors.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawCensus {
        RawCensus::from_pixels([
            Rgb::new(255, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
        ])
    }

    #[test]
    fn test_empty_set_is_identity() {
        let census = sample();
        assert_eq!(IgnoreSet::new().apply(&census), census);
    }

    #[test]
    fn test_removes_ignored_and_recomputes_total() {
        let census = sample();
        let filtered = IgnoreSet::from_iter([Rgb::new(0, 0, 255)]).apply(&census);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.total(), 3);
        assert_eq!(filtered.count(Rgb::new(255, 0, 0)), 2);
        assert!(!filtered.contains(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_ignoring_absent_color_changes_nothing() {
        let census = sample();
        let filtered = IgnoreSet::from_iter([Rgb::new(1, 2, 3)]).apply(&census);
        assert_eq!(filtered, census);
    }

    #[test]
    fn test_ignoring_everything_leaves_empty_census() {
        let census = sample();
        let all: IgnoreSet = census.colors().collect();
        let filtered = all.apply(&census);
        assert!(filtered.is_empty());
        assert_eq!(filtered.total(), 0);
    }

    #[test]
    fn test_insert_and_extend() {
        let mut set = IgnoreSet::new();
        assert!(set.insert(Rgb::new(0, 0, 0)));
        assert!(!set.insert(Rgb::new(0, 0, 0)));
        set.extend([Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(Rgb::new(2, 2, 2)));
    }
}
