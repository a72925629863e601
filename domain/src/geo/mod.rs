//! Map geometry

pub mod boundary;

pub use boundary::{BoundaryCollection, CountryShape, PolygonRings, Ring};
