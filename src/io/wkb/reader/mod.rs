//! Decoding of WKB and EWKB buffers into [`Geometry`][crate::geometry::Geometry] trees.

mod buffer;
mod geometry;
mod header;

pub(crate) use geometry::WKBGeometryReader;
