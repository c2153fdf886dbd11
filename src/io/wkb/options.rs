use serde::{Deserialize, Serialize};

use crate::io::wkb::common::Endianness;

/// The flavor of WKB geometry headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WkbDialect {
    /// ISO SQL/MM WKB: dimensions are encoded by adding 1000 (Z), 2000 (M) or 3000 (ZM) to the
    /// type code, and no SRID is ever embedded.
    Wkb,

    /// PostGIS extended WKB: dimensions and SRID presence are flags in the high bits of the type
    /// code, and an SRID may follow the type code.
    ///
    /// Readers in this dialect also accept ISO type codes.
    Ewkb,
}

/// Options for decoding WKB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    pub dialect: WkbDialect,

    /// The SRID given to geometries whose header does not embed one.
    pub default_srid: u32,

    /// The maximum nesting depth of geometries inside collections, compound curves and curve
    /// polygons.
    pub max_depth: usize,

    /// Decode a Point whose ordinates are all NaN as an empty Point.
    pub nan_point_as_empty: bool,
}

impl ReaderOptions {
    pub fn new(dialect: WkbDialect) -> Self {
        Self {
            dialect,
            ..Default::default()
        }
    }

    pub fn with_default_srid(self, default_srid: u32) -> Self {
        Self {
            default_srid,
            ..self
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            dialect: WkbDialect::Ewkb,
            default_srid: 0,
            max_depth: 128,
            nan_point_as_empty: true,
        }
    }
}

/// Options for encoding WKB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    pub dialect: WkbDialect,

    /// The byte order of every header and value written.
    pub byte_order: Endianness,
}

impl WriterOptions {
    pub fn new(dialect: WkbDialect) -> Self {
        Self {
            dialect,
            ..Default::default()
        }
    }

    pub fn with_byte_order(self, byte_order: Endianness) -> Self {
        Self { byte_order, ..self }
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            dialect: WkbDialect::Wkb,
            byte_order: Endianness::LittleEndian,
        }
    }
}
