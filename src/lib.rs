//! Simple Features geometry values, with readers and writers for the WKB and EWKB binary
//! encodings.
//!
//! Geometries are immutable owned trees built from the 13 kinds of [`geometry::Geometry`].
//! Every constructor checks the structural rules of its kind, so a tree that exists is a
//! valid one.
//!
//! ```
//! use sfgeo::datatypes::CoordinateSystem;
//! use sfgeo::geometry::{Geometry, LineString, Point};
//!
//! let cs = CoordinateSystem::xy(4326);
//! let line = LineString::new(cs, vec![Point::xy(0., 0.), Point::xy(1., 1.)]).unwrap();
//! let geom = Geometry::from(line);
//!
//! let bytes = geom.as_ewkb().unwrap();
//! assert_eq!(Geometry::from_ewkb(&bytes).unwrap(), geom);
//! assert_eq!(geom.as_ewkt(), "SRID=4326;LINESTRING (0 0, 1 1)");
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeoError, Result};
pub use geometry::Geometry;
pub use proxy::GeometryProxy;

pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
pub mod proxy;
#[cfg(test)]
pub(crate) mod test;
