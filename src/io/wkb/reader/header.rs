use log::trace;

use crate::error::{GeoError, Result};
use crate::io::wkb::common::{split_iso_code, WKBHeader, M_FLAG, SRID_FLAG, Z_FLAG};
use crate::io::wkb::options::WkbDialect;
use crate::io::wkb::reader::buffer::WKBBuffer;

impl WkbDialect {
    /// Read the type code (and SRID, if any) that follows a byte order marker.
    ///
    /// `ambient_srid` is used when the header does not embed an SRID.
    pub(crate) fn read_header(&self, buf: &mut WKBBuffer, ambient_srid: u32) -> Result<WKBHeader> {
        let code = buf.read_u32()?;
        let header = match self {
            WkbDialect::Wkb => read_iso_header(code, ambient_srid)?,
            WkbDialect::Ewkb => read_ewkb_header(buf, code, ambient_srid)?,
        };
        trace!(
            "WKB header: code={:#010x} base={} z={} m={} srid={}",
            header.code,
            header.base_type,
            header.has_z,
            header.has_m,
            header.srid
        );
        Ok(header)
    }
}

fn read_iso_header(code: u32, srid: u32) -> Result<WKBHeader> {
    let (base_type, has_z, has_m) = split_iso_code(code).ok_or(GeoError::UnsupportedType(code))?;
    Ok(WKBHeader {
        code,
        base_type,
        has_z,
        has_m,
        srid,
    })
}

fn read_ewkb_header(buf: &mut WKBBuffer, code: u32, ambient_srid: u32) -> Result<WKBHeader> {
    let flags = code & (Z_FLAG | M_FLAG | SRID_FLAG);
    let (base_type, iso_z, iso_m) =
        split_iso_code(code & !flags).ok_or(GeoError::UnsupportedType(code))?;

    let srid = if flags & SRID_FLAG != 0 {
        buf.read_u32()?
    } else {
        ambient_srid
    };

    Ok(WKBHeader {
        code,
        base_type,
        has_z: iso_z || flags & Z_FLAG != 0,
        has_m: iso_m || flags & M_FLAG != 0,
        srid,
    })
}
