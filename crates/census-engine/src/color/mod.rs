//! Color type
//!
//! The census works on plain 8-bit RGB triples. No gamma handling or color
//! space conversion happens here: decoded pixels are counted exactly as the
//! decoder produced them.

mod rgb;

pub use rgb::Rgb;
