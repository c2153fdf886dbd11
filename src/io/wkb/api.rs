use std::io::Write;

use log::debug;

use crate::error::{GeoError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::options::{ReaderOptions, WkbDialect, WriterOptions};
use crate::io::wkb::reader::WKBGeometryReader;
use crate::io::wkb::writer::{geometry_wkb_size, WKBGeometryWriter};

/// Decode one geometry from a WKB or EWKB buffer.
///
/// `ambient_srid` is the SRID of every geometry whose header does not embed one. In the
/// [`WkbDialect::Wkb`] dialect no header ever does.
///
/// ```
/// use sfgeo::io::wkb::{decode, WkbDialect};
///
/// let bytes = [
///     0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F, 0x00,
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
/// ];
/// let geom = decode(&bytes, WkbDialect::Ewkb, 0).unwrap();
/// assert_eq!(geom.to_string(), "POINT (1 2)");
/// ```
pub fn decode(buf: &[u8], dialect: WkbDialect, ambient_srid: u32) -> Result<Geometry> {
    read_wkb(
        buf,
        &ReaderOptions::new(dialect).with_default_srid(ambient_srid),
    )
}

/// Decode one geometry from a buffer, which must hold nothing else.
pub fn read_wkb(buf: &[u8], options: &ReaderOptions) -> Result<Geometry> {
    debug!(
        "Decoding {:?} geometry from {} bytes",
        options.dialect,
        buf.len()
    );
    let mut reader = WKBGeometryReader::new(buf, *options);
    let geom = reader.read_geometry(options.default_srid, 0)?;

    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(GeoError::invalid(format!(
            "{} trailing bytes after the geometry",
            remaining
        )));
    }
    Ok(geom)
}

/// Encode a geometry as little-endian WKB or EWKB.
pub fn encode(geom: &Geometry, dialect: WkbDialect) -> Result<Vec<u8>> {
    let options = WriterOptions::new(dialect);
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom, &options));
    write_wkb(&mut buf, geom, &options)?;
    Ok(buf)
}

/// Write a geometry to any [`Write`] sink.
pub fn write_wkb<W: Write>(writer: W, geom: &Geometry, options: &WriterOptions) -> Result<()> {
    debug!(
        "Encoding {} as {:?} ({:?})",
        geom.geometry_type(),
        options.dialect,
        options.byte_order
    );
    WKBGeometryWriter::new(writer, *options).write(geom)
}

impl Geometry {
    /// Decode ISO WKB, giving the whole tree the SRID `srid`.
    pub fn from_binary(buf: &[u8], srid: u32) -> Result<Self> {
        decode(buf, WkbDialect::Wkb, srid)
    }

    /// Decode EWKB. Geometries without an embedded SRID get SRID 0.
    pub fn from_ewkb(buf: &[u8]) -> Result<Self> {
        decode(buf, WkbDialect::Ewkb, 0)
    }

    /// Encode as little-endian ISO WKB. The SRID is not part of the output.
    pub fn as_binary(&self) -> Result<Vec<u8>> {
        encode(self, WkbDialect::Wkb)
    }

    /// Encode as little-endian EWKB, embedding the SRID if it is not 0.
    pub fn as_ewkb(&self) -> Result<Vec<u8>> {
        encode(self, WkbDialect::Ewkb)
    }
}
