pub mod chart;
pub mod svg_to_png;

pub use chart::{HistogramChart, CHART_HEIGHT, CHART_WIDTH};
pub use svg_to_png::SvgRenderer;

use crate::error::RenderError;
use census_engine::HistogramBar;

/// Render histogram bars as a PNG bar chart
pub fn render_histogram(
    renderer: &SvgRenderer,
    bars: &[HistogramBar],
) -> Result<Vec<u8>, RenderError> {
    let svg = HistogramChart::new(bars).to_svg()?;
    renderer.render_to_png(svg.as_bytes(), CHART_WIDTH, CHART_HEIGHT)
}
