//! Reading and writing geometries as ISO WKB and PostGIS EWKB.
//!
//! Both dialects share one recursive decoder and one encoder; they only differ in how a
//! geometry header carries its dimensionality and SRID.

mod api;
mod common;
mod options;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{decode, encode, read_wkb, write_wkb};
pub use common::{Endianness, WKBHeader, WKBType};
pub use options::{ReaderOptions, WkbDialect, WriterOptions};
pub use writer::geometry_wkb_size;
