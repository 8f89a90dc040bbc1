pub mod batch;
pub mod image_analyzer;

pub use batch::{run_batch, BatchOptions, BatchReport};
pub use image_analyzer::{ImageAnalyzer, ImageReport};
