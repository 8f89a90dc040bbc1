//! ColorCensus builder -- the primary entry point for the crate.
//!
//! [`ColorCensus`] holds the per-run configuration (reference palette and
//! ignore set) and runs the census → filter → quantize → aggregate pipeline
//! for one image at a time.

use std::str::FromStr;

use super::error::CensusError;
use crate::aggregate::AggregationResult;
use crate::census::{IgnoreSet, RawCensus};
use crate::color::Rgb;
use crate::histogram::{select_bars, HistogramBar};
use crate::palette::ReferencePalette;
use crate::quantize::Quantizer;

/// Census pipeline with fluent configuration.
///
/// - Configuration methods consume and return `self`
/// - [`analyze()`](Self::analyze) takes `&self`, so one census is reused
///   for every image of a batch and can be shared across threads
/// - The palette and ignore set are never modified by analysis
///
/// # Example
///
/// ```
/// use census_engine::{ColorCensus, ColorKey, IgnoreSet, ReferencePalette, Rgb};
///
/// let palette = ReferencePalette::new([
///     ("warm", Rgb::new(255, 0, 0)),
///     ("cool", Rgb::new(0, 0, 255)),
/// ])
/// .unwrap();
///
/// let census = ColorCensus::new()
///     .palette(palette)
///     .ignore(IgnoreSet::from_iter([Rgb::new(0, 0, 255)]));
///
/// let pixels = [
///     Rgb::new(255, 0, 0),
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 255, 0),
///     Rgb::new(0, 0, 255),
/// ];
/// let result = census.analyze(pixels);
///
/// assert_eq!(result.total(), 3);
/// let warm = result.get(&ColorKey::Label("warm".into())).unwrap();
/// assert_eq!(warm.count, 3);
/// assert_eq!(warm.percentage, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorCensus {
    palette: ReferencePalette,
    ignore: IgnoreSet,
}

impl ColorCensus {
    /// A census with no palette and nothing ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from color text, e.g. configuration values.
    ///
    /// `references` are `(label, color)` pairs in tie-break order; both
    /// lists accept anything [`Rgb::from_str`] does.
    pub fn from_strs(references: &[(&str, &str)], ignore: &[&str]) -> Result<Self, CensusError> {
        let palette = ReferencePalette::from_strs(references)?;
        let ignore = ignore
            .iter()
            .map(|s| Rgb::from_str(s))
            .collect::<Result<IgnoreSet, _>>()?;
        Ok(Self { palette, ignore })
    }

    /// Set the reference palette. An empty palette disables quantization.
    #[inline]
    pub fn palette(mut self, palette: ReferencePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the colors excluded from counting.
    #[inline]
    pub fn ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// The configured reference palette.
    #[inline]
    pub fn reference_palette(&self) -> &ReferencePalette {
        &self.palette
    }

    /// The configured ignore set.
    #[inline]
    pub fn ignore_set(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Run the full pipeline over decoded pixels.
    pub fn analyze<I>(&self, pixels: I) -> AggregationResult
    where
        I: IntoIterator<Item = Rgb>,
    {
        self.analyze_census(&RawCensus::from_pixels(pixels))
    }

    /// Run the full pipeline over a packed `RGBRGB...` buffer.
    pub fn analyze_rgb_bytes(&self, data: &[u8]) -> AggregationResult {
        self.analyze_census(&RawCensus::from_rgb_bytes(data))
    }

    /// Run filter, quantize and aggregate over an existing census.
    pub fn analyze_census(&self, census: &RawCensus) -> AggregationResult {
        let filtered = self.ignore.apply(census);
        let quantized = Quantizer::new(&self.palette).quantize(&filtered);
        AggregationResult::from_quantized(&quantized, &self.palette)
    }

    /// Histogram bars for `result` (see [`select_bars`]).
    #[inline]
    pub fn histogram(&self, result: &AggregationResult, threshold: f64) -> Vec<HistogramBar> {
        select_bars(result, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteError;

    #[test]
    fn test_from_strs() {
        let census =
            ColorCensus::from_strs(&[("a", "#000"), ("b", "255 255 255")], &["1 2 3"]).unwrap();
        assert_eq!(census.reference_palette().len(), 2);
        assert!(census.ignore_set().contains(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_from_strs_bad_ignore_color() {
        let result = ColorCensus::from_strs(&[], &["nope"]);
        assert!(matches!(result, Err(CensusError::ParseColor(_))));
    }

    #[test]
    fn test_from_strs_duplicate_label() {
        let result = ColorCensus::from_strs(&[("a", "#000"), ("a", "#111")], &[]);
        assert!(matches!(
            result,
            Err(CensusError::Palette(PaletteError::DuplicateLabel { .. }))
        ));
    }

    #[test]
    fn test_reusable_across_images() {
        let census = ColorCensus::new();
        let first = census.analyze([Rgb::new(1, 1, 1)]);
        let second = census.analyze([Rgb::new(2, 2, 2), Rgb::new(2, 2, 2)]);
        assert_eq!(first.total(), 1);
        assert_eq!(second.total(), 2);
        assert!(first.get_by_name("2 2 2").is_none());
    }

    #[test]
    fn test_analyze_rgb_bytes_matches_analyze() {
        let bytes = [10, 20, 30, 10, 20, 30, 40, 50, 60];
        let census = ColorCensus::new();
        let from_bytes = census.analyze_rgb_bytes(&bytes);
        let from_pixels = census.analyze([
            Rgb::new(10, 20, 30),
            Rgb::new(10, 20, 30),
            Rgb::new(40, 50, 60),
        ]);
        assert_eq!(from_bytes, from_pixels);
    }

    #[test]
    fn test_histogram_delegates_to_selector() {
        let census = ColorCensus::new();
        let result = census.analyze([Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(9, 9, 9)]);
        let bars = census.histogram(&result, 0.5);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].count, 2);
    }
}
