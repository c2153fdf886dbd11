//! Binary and text encodings of geometries, and interoperability with the `geo` crate.

pub mod geo;
pub mod wkb;
pub mod wkt;
