//! Public API: the [`ColorCensus`] builder and the unified [`CensusError`].

mod builder;
mod error;

pub use builder::ColorCensus;
pub use error::CensusError;
