//! Pixel census and ignore filtering
//!
//! [`RawCensus`] reduces an image to its distinct colors with counts.
//! [`IgnoreSet`] removes caller-specified colors before anything else looks
//! at the census.

mod ignore;
mod raw;

pub use ignore::IgnoreSet;
pub use raw::RawCensus;
