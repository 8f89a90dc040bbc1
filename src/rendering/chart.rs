//! SVG bar chart for the selected histogram bars.
//!
//! Layout mirrors a default 640x480 plotting canvas: title on top, y axis
//! with count ticks on the left, one filled bar per entry with its label
//! rotated underneath. Geometry is computed here; the markup lives in
//! `templates/histogram.svg` and is rendered with Tera.

use crate::error::RenderError;
use census_engine::HistogramBar;
use serde::Serialize;
use tera::{Context, Tera};

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 480;

const TEMPLATE_NAME: &str = "histogram.svg";
const TEMPLATE: &str = include_str!("templates/histogram.svg");

const TITLE: &str = "RGB Histogram";

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 120.0;

/// Fraction of each bar slot covered by the bar
const BAR_FILL: f64 = 0.8;

const TARGET_TICKS: u64 = 5;

#[derive(Debug, Serialize)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    center_x: f64,
    center_y: f64,
}

impl PlotArea {
    fn new() -> Self {
        let width = CHART_WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
        let height = CHART_HEIGHT as f64 - MARGIN_TOP - MARGIN_BOTTOM;
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width,
            height,
            center_x: MARGIN_LEFT + width / 2.0,
            center_y: MARGIN_TOP + height / 2.0,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Serialize)]
struct Tick {
    value: u64,
    x1: f64,
    y: f64,
    text_x: f64,
    text_y: f64,
}

#[derive(Debug, Serialize)]
struct BarShape {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    center: f64,
    label_y: f64,
    fill: String,
    label: String,
}

/// Everything the chart template draws
#[derive(Debug, Serialize)]
struct ChartLayout {
    width: u32,
    height: u32,
    title: &'static str,
    title_y: f64,
    x_label_y: f64,
    plot: PlotArea,
    ticks: Vec<Tick>,
    bars: Vec<BarShape>,
}

impl ChartLayout {
    fn new(bars: &[HistogramBar]) -> Self {
        let plot = PlotArea::new();
        let bottom = plot.bottom();

        let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
        let (axis_max, step) = y_scale(max);
        let scale = |count: u64| plot.height * count as f64 / axis_max as f64;

        let ticks = (0..=axis_max)
            .step_by(step as usize)
            .map(|value| {
                let y = bottom - scale(value);
                Tick {
                    value,
                    x1: plot.left - 4.0,
                    y,
                    text_x: plot.left - 6.0,
                    text_y: y + 3.5,
                }
            })
            .collect();

        let slot = plot.width / bars.len().max(1) as f64;
        let bar_width = slot * BAR_FILL;
        let bars = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let center = plot.left + slot * (i as f64 + 0.5);
                let height = scale(bar.count);
                let [r, g, b] = bar.color.map(to_channel);
                BarShape {
                    x: center - bar_width / 2.0,
                    y: bottom - height,
                    width: bar_width,
                    height,
                    center,
                    label_y: bottom + 10.0,
                    fill: format!("rgb({r},{g},{b})"),
                    label: bar.label.clone(),
                }
            })
            .collect();

        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            title: TITLE,
            title_y: MARGIN_TOP / 2.0 + 6.0,
            x_label_y: CHART_HEIGHT as f64 - 10.0,
            plot,
            ticks,
            bars,
        }
    }
}

/// Builds the histogram chart SVG
pub struct HistogramChart<'a> {
    bars: &'a [HistogramBar],
}

impl<'a> HistogramChart<'a> {
    pub fn new(bars: &'a [HistogramBar]) -> Self {
        Self { bars }
    }

    /// Render the chart as an SVG document
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let mut tera = Tera::default();
        // Tera only autoescapes .html/.xml names by default; labels are user text
        tera.autoescape_on(vec![".svg"]);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

        let context = Context::from_serialize(ChartLayout::new(self.bars))?;
        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Convert a normalized channel back to 0..=255
fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Pick the y axis top and tick step for the largest count.
///
/// Steps are 1, 2 or 5 times a power of ten; the axis top is the first step
/// multiple at or above `max`. An empty chart gets a unit axis.
pub(crate) fn y_scale(max: u64) -> (u64, u64) {
    if max == 0 {
        return (1, 1);
    }

    let raw = max.div_ceil(TARGET_TICKS).max(1);
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    let step = [1, 2, 5, 10]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10 * magnitude);

    (max.div_ceil(step) * step, step)
}
