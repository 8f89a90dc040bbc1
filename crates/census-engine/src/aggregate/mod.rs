//! Re-aggregation of counts under (possibly quantized) keys
//!
//! The [`AggregationResult`] is the externally visible result of a census
//! for one image: every key with its summed count, its share of the
//! surviving pixels and the color that represents it.

use std::collections::{BTreeMap, HashMap};

use crate::color::Rgb;
use crate::palette::ReferencePalette;
use crate::quantize::{ColorKey, QuantizedColor};

/// Aggregated statistics for one key.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Original color or palette label
    pub key: ColorKey,
    /// Pixels counted under this key
    pub count: u64,
    /// `count / total`, in `0.0..=1.0`
    pub percentage: f64,
    /// Palette color for labels, the original color otherwise
    pub rgb: Rgb,
}

/// Per-image aggregation, keyed by [`ColorKey`].
///
/// Iteration is in key order, so two runs over the same image produce the
/// same sequence. The sum of all counts equals [`total`](Self::total); the
/// percentages sum to 1.0 whenever the total is positive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    entries: BTreeMap<ColorKey, ColorEntry>,
    total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Group {
    Palette(usize),
    Color(Rgb),
}

impl AggregationResult {
    /// Group quantized colors by key and compute percentages.
    ///
    /// `palette` must be the palette the colors were quantized against; it
    /// supplies labels and representative colors for palette groups.
    ///
    /// If no pixels survive (total of zero) the result is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use census_engine::{
    ///     AggregationResult, ColorKey, Quantizer, RawCensus, ReferencePalette, Rgb,
    /// };
    ///
    /// let palette = ReferencePalette::empty();
    /// let (one, two) = (Rgb::new(1, 1, 1), Rgb::new(2, 2, 2));
    /// let census = RawCensus::from_pixels([one, one, two]);
    /// let quantized = Quantizer::new(&palette).quantize(&census);
    ///
    /// let result = AggregationResult::from_quantized(&quantized, &palette);
    /// let entry = result.get(&ColorKey::Original(Rgb::new(1, 1, 1))).unwrap();
    /// assert_eq!(entry.count, 2);
    /// assert!((entry.percentage - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn from_quantized(quantized: &[QuantizedColor], palette: &ReferencePalette) -> Self {
        let mut groups: HashMap<Group, u64> = HashMap::new();
        let mut total = 0u64;

        for q in quantized {
            let group = match q.palette_index {
                Some(idx) => Group::Palette(idx),
                None => Group::Color(q.color),
            };
            *groups.entry(group).or_insert(0) += q.count;
            total += q.count;
        }

        if total == 0 {
            return Self::default();
        }

        let entries = groups
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(group, count)| {
                let (key, rgb) = match group {
                    Group::Palette(idx) => {
                        let entry = palette.entry(idx);
                        (ColorKey::Label(entry.label.clone()), entry.color)
                    }
                    Group::Color(color) => (ColorKey::Original(color), color),
                };
                let entry = ColorEntry {
                    key: key.clone(),
                    count,
                    percentage: count as f64 / total as f64,
                    rgb,
                };
                (key, entry)
            })
            .collect();

        Self { entries, total }
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no pixel survived filtering.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pixels represented (after the ignore filter).
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entry for `key`.
    pub fn get(&self, key: &ColorKey) -> Option<&ColorEntry> {
        self.entries.get(key)
    }

    /// Entry whose display string is `name` (`"R G B"` or a label).
    pub fn get_by_name(&self, name: &str) -> Option<&ColorEntry> {
        self.entries.values().find(|e| e.key.to_string() == name)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a AggregationResult {
    type Item = &'a ColorEntry;
    type IntoIter = std::collections::btree_map::Values<'a, ColorKey, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
