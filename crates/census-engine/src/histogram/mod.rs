//! Histogram bar selection
//!
//! Picks the significant entries of an [`AggregationResult`] and orders them
//! for a bar chart. Rendering itself is left to the caller.

use crate::aggregate::AggregationResult;

/// One bar of a color histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBar {
    /// Category label (`"R G B"` or a palette label)
    pub label: String,
    /// Bar color, channels in `0.0..=1.0`
    pub color: [f32; 3],
    /// Bar height (raw pixel count)
    pub count: u64,
}

/// Select entries with `percentage >= threshold`, largest count first.
///
/// Entries with equal counts keep the result's key order. A threshold of
/// `0.0` keeps every entry; a threshold above `1.0` keeps none.
///
/// # Example
///
/// ```
/// use census_engine::{select_bars, ColorCensus, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// let pixels = [red, red, red, Rgb::new(0, 0, 255)];
/// let result = ColorCensus::new().analyze(pixels);
///
/// let bars = select_bars(&result, 0.5);
/// assert_eq!(bars.len(), 1);
/// assert_eq!(bars[0].label, "255 0 0");
/// assert_eq!(bars[0].color, [1.0, 0.0, 0.0]);
/// assert_eq!(bars[0].count, 3);
/// ```
pub fn select_bars(result: &AggregationResult, threshold: f64) -> Vec<HistogramBar> {
    let mut bars: Vec<HistogramBar> = result
        .iter()
        .filter(|e| e.percentage >= threshold)
        .map(|e| HistogramBar {
            label: e.key.to_string(),
            color: e.rgb.to_normalized(),
            count: e.count,
        })
        .collect();

    // Stable: ties stay in key order
    bars.sort_by(|a, b| b.count.cmp(&a.count));
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::RawCensus;
    use crate::color::Rgb;
    use crate::palette::ReferencePalette;
    use crate::quantize::Quantizer;

    fn result_from_counts(pairs: &[(Rgb, u64)]) -> AggregationResult {
        let palette = ReferencePalette::empty();
        let census = RawCensus::from_counts(pairs.iter().copied());
        let quantized = Quantizer::new(&palette).quantize(&census);
        AggregationResult::from_quantized(&quantized, &palette)
    }

    #[test]
    fn test_threshold_filters_and_orders() {
        let result = result_from_counts(&[
            (Rgb::new(1, 0, 0), 10),
            (Rgb::new(2, 0, 0), 60),
            (Rgb::new(3, 0, 0), 30),
        ]);

        let bars = select_bars(&result, 0.25);
        let counts: Vec<u64> = bars.iter().map(|b| b.count).collect();
        assert_eq!(counts, [60, 30]);
        assert_eq!(bars[0].label, "2 0 0");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let result = result_from_counts(&[(Rgb::new(1, 0, 0), 1), (Rgb::new(2, 0, 0), 3)]);
        let bars = select_bars(&result, 0.25);
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn test_zero_threshold_keeps_all() {
        let result = result_from_counts(&[(Rgb::new(1, 0, 0), 1), (Rgb::new(2, 0, 0), 1000)]);
        assert_eq!(select_bars(&result, 0.0).len(), 2);
    }

    #[test]
    fn test_threshold_above_one_keeps_none() {
        let result = result_from_counts(&[(Rgb::new(1, 0, 0), 1)]);
        assert!(select_bars(&result, 1.01).is_empty());
    }

    #[test]
    fn test_equal_counts_keep_key_order() {
        let result = result_from_counts(&[
            (Rgb::new(9, 0, 0), 5),
            (Rgb::new(4, 0, 0), 5),
            (Rgb::new(6, 0, 0), 5),
        ]);
        let labels: Vec<String> = select_bars(&result, 0.0).into_iter().map(|b| b.label).collect();
        assert_eq!(labels, ["4 0 0", "6 0 0", "9 0 0"]);
    }

    #[test]
    fn test_empty_result() {
        assert!(select_bars(&AggregationResult::default(), 0.0).is_empty());
    }
}
