//! Color legend for the choropleth map

pub mod color;
pub mod palette;

pub use color::Rgb;
pub use palette::Legend;
