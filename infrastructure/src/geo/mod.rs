//! Country boundaries and choropleth output

pub mod choropleth;
pub mod geojson_source;

pub use choropleth::PlottersMapRenderer;
pub use geojson_source::{GeoJsonBoundarySource, parse_boundaries};
