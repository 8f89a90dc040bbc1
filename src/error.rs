use census_engine::{PaletteError, ParseColorError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid reference palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid color '{text}': {source}")]
    Color {
        text: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Invalid reference '{0}' (expected NAME=COLOR)")]
    Reference(String),

    #[error("Plot threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Not an image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Chart template error: {0}")]
    Template(#[from] tera::Error),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
