//! Encoding of [`Geometry`][crate::geometry::Geometry] trees as WKB and EWKB.

mod buffer;
mod geometry;

pub use geometry::geometry_wkb_size;
pub(crate) use geometry::WKBGeometryWriter;
