//! census-engine: per-image color census with reference quantization
//!
//! This library reduces an image to the distinct RGB colors it contains,
//! optionally collapses them onto a small named palette, and reports each
//! resulting key's pixel count and share of the image.
//!
//! # Quick Start
//!
//! The [`ColorCensus`] builder is the primary entry point:
//!
//! ```
//! use census_engine::{ColorCensus, Rgb};
//!
//! let pixels = [
//!     Rgb::new(255, 0, 0),
//!     Rgb::new(255, 0, 0),
//!     Rgb::new(0, 255, 0),
//!     Rgb::new(0, 0, 255),
//! ];
//! let result = ColorCensus::new().analyze(pixels);
//!
//! let red = result.get_by_name("255 0 0").unwrap();
//! assert_eq!(red.count, 2);
//! assert_eq!(red.percentage, 0.5);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! decoded pixels
//!     |
//!     v
//! RawCensus          distinct color -> count
//!     |
//!     v
//! IgnoreSet::apply   drop excluded colors (before anything else)
//!     |
//!     v
//! Quantizer          distinct color -> nearest palette entry
//!     |              (skipped for an empty palette)
//!     v
//! AggregationResult  key -> {count, percentage, rgb}
//!     |
//!     v
//! select_bars        entries >= threshold, largest count first
//! ```
//!
//! # Matching
//!
//! Colors are matched to the palette by plain Euclidean distance over the
//! three 8-bit channels. When two entries are equally close the one defined
//! first wins, so palette order is part of the configuration. Matching is
//! done once per distinct color, not per pixel.
//!
//! # Keys
//!
//! Results are keyed by [`ColorKey`], which keeps unquantized colors and
//! palette labels apart. Its `Display` form (`"R G B"` or the label) is
//! what serialized records use.

pub mod aggregate;
pub mod api;
pub mod census;
pub mod color;
pub mod histogram;
pub mod palette;
pub mod quantize;


pub use aggregate::{AggregationResult, ColorEntry};
pub use api::{CensusError, ColorCensus};
pub use census::{IgnoreSet, RawCensus};
pub use color::Rgb;
pub use histogram::{select_bars, HistogramBar};
pub use palette::{PaletteEntry, PaletteError, ParseColorError, ReferencePalette};
pub use quantize::{ColorKey, QuantizedColor, Quantizer};
