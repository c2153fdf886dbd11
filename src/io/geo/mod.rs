//! Conversions between [`Geometry`][crate::geometry::Geometry] and [`geo`] geometries.
//!
//! `geo` only models 2D linear geometries: curves, surfaces of patches, Z and M ordinates and
//! empty points cannot be converted to it. Geometries converted from `geo` are XY with SRID 0.

mod scalar;

pub use scalar::{line_string_to_geo, point_to_geo, polygon_to_geo};
