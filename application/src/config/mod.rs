//! Application-level configuration.
//!
//! - [`MapSettings`]: choropleth image parameters

pub mod map_settings;

pub use map_settings::MapSettings;
