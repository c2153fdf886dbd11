//! Writing geometries as WKT and EWKT text.
//!
//! Only the text projection is provided: geometries cannot be parsed from text.

mod writer;
