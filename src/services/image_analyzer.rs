use crate::error::{AnalysisError, RenderError};
use crate::models::{to_json_pretty, CensusConfig};
use crate::rendering::{render_histogram, SvgRenderer};
use census_engine::{AggregationResult, ColorCensus, HistogramBar};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Census outcome for a single image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageReport {
    pub width: u32,
    pub height: u32,
    /// Counts and percentages per key
    pub result: AggregationResult,
    /// Entries at or above the plot threshold, tallest first
    pub bars: Vec<HistogramBar>,
}

impl ImageReport {
    /// The JSON record for this image
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        to_json_pretty(&self.result)
    }
}

/// Runs the census pipeline on decoded images and renders their charts.
///
/// Built once per run and shared across images (and threads).
pub struct ImageAnalyzer {
    census: ColorCensus,
    plot_threshold: f64,
    renderer: SvgRenderer,
}

impl ImageAnalyzer {
    pub fn new(config: CensusConfig) -> Self {
        Self {
            census: config.census(),
            plot_threshold: config.plot_threshold,
            renderer: SvgRenderer::new(),
        }
    }

    /// Decode an image file and run the census on it.
    ///
    /// The format is detected from the file content, falling back to the
    /// extension. Files that cannot be decoded fail with
    /// [`AnalysisError::Decode`].
    pub fn analyze_path(&self, path: &Path) -> Result<ImageReport, AnalysisError> {
        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let report = self.analyze_image(&img);
        tracing::debug!(
            file = %path.display(),
            width = report.width,
            height = report.height,
            keys = report.result.len(),
            bars = report.bars.len(),
            "Analyzed image"
        );
        Ok(report)
    }

    /// Run the census on an in-memory image. Alpha is discarded.
    pub fn analyze_image(&self, img: &DynamicImage) -> ImageReport {
        let rgb = img.to_rgb8();
        let result = self.census.analyze_rgb_bytes(rgb.as_raw());
        let bars = self.census.histogram(&result, self.plot_threshold);

        ImageReport {
            width: rgb.width(),
            height: rgb.height(),
            result,
            bars,
        }
    }

    /// Render the report's histogram chart as PNG
    pub fn render_histogram(&self, report: &ImageReport) -> Result<Vec<u8>, RenderError> {
        render_histogram(&self.renderer, &report.bars)
    }

    /// Write the JSON record and the histogram chart
    pub fn write_outputs(
        &self,
        report: &ImageReport,
        json_path: &Path,
        histogram_path: &Path,
    ) -> Result<(), AnalysisError> {
        std::fs::write(json_path, report.to_json()?)?;
        std::fs::write(histogram_path, self.render_histogram(report)?)?;
        Ok(())
    }
}
