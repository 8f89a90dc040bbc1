pub mod config;
pub mod record;

pub use config::{CensusConfig, ConfigOverrides, DEFAULT_PLOT_THRESHOLD};
pub use record::{to_json_pretty, CensusRecord, ColorRecord};
