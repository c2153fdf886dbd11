use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::datatypes::CoordinateSystem;
use crate::error::GeoError;

/// EWKB flag marking the presence of Z ordinates.
pub(crate) const Z_FLAG: u32 = 0x8000_0000;
/// EWKB flag marking the presence of M ordinates.
pub(crate) const M_FLAG: u32 = 0x4000_0000;
/// EWKB flag marking an SRID after the geometry type.
pub(crate) const SRID_FLAG: u32 = 0x2000_0000;

/// The base geometry type codes of ISO SQL/MM WKB, without dimension information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
    /// A WKB CircularString
    CircularString = 8,
    /// A WKB CompoundCurve
    CompoundCurve = 9,
    /// A WKB CurvePolygon
    CurvePolygon = 10,
    /// A WKB MultiCurve. Not supported by the codec.
    MultiCurve = 11,
    /// A WKB MultiSurface. Not supported by the codec.
    MultiSurface = 12,
    /// A WKB Curve. Abstract, never found on the wire.
    Curve = 13,
    /// A WKB Surface. Abstract, never found on the wire.
    Surface = 14,
    /// A WKB PolyhedralSurface
    PolyhedralSurface = 15,
    /// A WKB TIN
    Tin = 16,
    /// A WKB Triangle
    Triangle = 17,
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeoError::InvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// The decoded header of a single WKB geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WKBHeader {
    /// The type code exactly as found on the wire, flags and offsets included.
    pub code: u32,
    /// The base geometry type code, 1 to 17 for known types.
    pub base_type: u32,
    pub has_z: bool,
    pub has_m: bool,
    /// The SRID embedded in the header, or the SRID inherited from the enclosing geometry.
    pub srid: u32,
}

impl WKBHeader {
    pub fn coordinate_system(&self) -> CoordinateSystem {
        CoordinateSystem::new(self.has_z, self.has_m, self.srid)
    }

    /// Resolve the base type code to a [WKBType].
    pub fn wkb_type(&self) -> Result<WKBType, GeoError> {
        WKBType::try_from_primitive(self.base_type)
            .map_err(|_| GeoError::UnsupportedType(self.code))
    }
}

/// Split an ISO type code such as 1003 into its base type and Z/M flags.
///
/// Returns `None` if the thousands digit is not one of 0 (XY), 1 (Z), 2 (M) or 3 (ZM).
pub(crate) fn split_iso_code(code: u32) -> Option<(u32, bool, bool)> {
    let base_type = code % 1000;
    match code / 1000 {
        0 => Some((base_type, false, false)),
        1 => Some((base_type, true, false)),
        2 => Some((base_type, false, true)),
        3 => Some((base_type, true, true)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_order() {
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::try_from(1).unwrap(), Endianness::LittleEndian);
        assert!(matches!(
            Endianness::try_from(2),
            Err(GeoError::InvalidByteOrder(2))
        ));
        assert_eq!(u8::from(Endianness::LittleEndian), 1);
    }

    #[test]
    fn iso_codes() {
        assert_eq!(split_iso_code(3), Some((3, false, false)));
        assert_eq!(split_iso_code(1017), Some((17, true, false)));
        assert_eq!(split_iso_code(2001), Some((1, false, true)));
        assert_eq!(split_iso_code(3015), Some((15, true, true)));
        assert_eq!(split_iso_code(4001), None);
        assert_eq!(split_iso_code(999), Some((999, false, false)));
    }

    #[test]
    fn unknown_base_type() {
        let header = WKBHeader {
            code: 999,
            base_type: 999,
            has_z: false,
            has_m: false,
            srid: 0,
        };
        assert!(matches!(
            header.wkb_type(),
            Err(GeoError::UnsupportedType(999))
        ));
    }
}
