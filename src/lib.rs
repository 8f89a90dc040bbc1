//! Colour Census - per-image color counts for directories of images
//!
//! Wraps the `census-engine` crate with image decoding, YAML configuration,
//! JSON records and PNG histogram charts.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
