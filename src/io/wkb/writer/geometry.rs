use std::io::Write;

use crate::datatypes::CoordinateSystem;
use crate::error::Result;
use crate::geometry::{
    CircularString, CompoundCurve, CompoundCurveSegment, Curve, CurvePolygon, Geometry,
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    PolyhedralSurface, Tin, Triangle,
};
use crate::io::wkb::common::{WKBType, M_FLAG, SRID_FLAG, Z_FLAG};
use crate::io::wkb::options::{WkbDialect, WriterOptions};
use crate::io::wkb::writer::buffer::WKBWriteBuffer;

/// The byte length of a nested header: byte order and type code.
const NESTED_HEADER_SIZE: usize = 1 + 4;

/// A geometry that can be written as a complete WKB geometry: a header followed by a body.
trait WKBGeometry {
    fn wkb_type(&self) -> WKBType;

    fn cs(&self) -> CoordinateSystem;

    /// The byte length of everything after the header.
    fn body_size(&self) -> usize;

    fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()>;
}

/// The EWKB SRID is only written once, at the outermost geometry, and only if it is set.
fn embeds_srid(cs: &CoordinateSystem, options: &WriterOptions, outermost: bool) -> bool {
    options.dialect == WkbDialect::Ewkb && outermost && cs.srid() != 0
}

fn points_size(cs: &CoordinateSystem, points: &[Point]) -> usize {
    4 + points.len() * cs.coordinate_dimension() * 8
}

fn rings_size(cs: &CoordinateSystem, rings: &[LineString]) -> usize {
    4 + rings
        .iter()
        .map(|ring| points_size(cs, ring.points()))
        .sum::<usize>()
}

fn nested_size<T: WKBGeometry>(children: &[T]) -> usize {
    4 + children
        .iter()
        .map(|child| NESTED_HEADER_SIZE + child.body_size())
        .sum::<usize>()
}

/// The byte length of a geometry encoded with the given options.
pub fn geometry_wkb_size(geom: &Geometry, options: &WriterOptions) -> usize {
    let srid_size = if embeds_srid(&geom.coordinate_system(), options, true) {
        4
    } else {
        0
    };
    NESTED_HEADER_SIZE + srid_size + geom.body_size()
}

/// Encoder of geometry trees, writing every header and value in a single byte order.
pub(crate) struct WKBGeometryWriter<W: Write> {
    buf: WKBWriteBuffer<W>,
    options: WriterOptions,
}

impl<W: Write> WKBGeometryWriter<W> {
    pub fn new(writer: W, options: WriterOptions) -> Self {
        Self {
            buf: WKBWriteBuffer::new(writer, options.byte_order),
            options,
        }
    }

    /// Write the outermost geometry of a WKB buffer.
    pub fn write(&mut self, geom: &Geometry) -> Result<()> {
        self.write_geometry(geom, true)
    }

    fn write_geometry<G: WKBGeometry>(&mut self, geom: &G, outermost: bool) -> Result<()> {
        self.buf.write_byte_order()?;
        self.write_header(geom.wkb_type(), &geom.cs(), outermost)?;
        geom.write_body(self)
    }

    fn write_header(
        &mut self,
        wkb_type: WKBType,
        cs: &CoordinateSystem,
        outermost: bool,
    ) -> Result<()> {
        let base_type = u32::from(wkb_type);
        match self.options.dialect {
            WkbDialect::Wkb => {
                let offset = match (cs.has_z(), cs.has_m()) {
                    (false, false) => 0,
                    (true, false) => 1000,
                    (false, true) => 2000,
                    (true, true) => 3000,
                };
                self.buf.write_u32(base_type + offset)
            }
            WkbDialect::Ewkb => {
                let mut code = base_type;
                if cs.has_z() {
                    code |= Z_FLAG;
                }
                if cs.has_m() {
                    code |= M_FLAG;
                }
                if embeds_srid(cs, &self.options, outermost) {
                    self.buf.write_u32(code | SRID_FLAG)?;
                    self.buf.write_u32(cs.srid())
                } else {
                    self.buf.write_u32(code)
                }
            }
        }
    }

    /// Write the bare coordinates of a point. An empty point is written as NaN coordinates.
    fn write_point(&mut self, point: &Point) -> Result<()> {
        if point.is_empty() {
            let dim = point.coordinate_system().coordinate_dimension();
            return self.buf.write_doubles(&[f64::NAN; 4][..dim]);
        }
        self.buf.write_doubles(point.coords())
    }

    fn write_points(&mut self, points: &[Point]) -> Result<()> {
        self.buf.write_count(points.len())?;
        for point in points {
            self.write_point(point)?;
        }
        Ok(())
    }

    fn write_rings(&mut self, rings: &[LineString]) -> Result<()> {
        self.buf.write_count(rings.len())?;
        for ring in rings {
            self.write_points(ring.points())?;
        }
        Ok(())
    }

    fn write_children<G: WKBGeometry>(&mut self, children: &[G]) -> Result<()> {
        self.buf.write_count(children.len())?;
        for child in children {
            self.write_geometry(child, false)?;
        }
        Ok(())
    }
}

impl WKBGeometry for Point {
    fn wkb_type(&self) -> WKBType {
        WKBType::Point
    }

    fn cs(&self) -> CoordinateSystem {
        self.coordinate_system()
    }

    fn body_size(&self) -> usize {
        self.coordinate_system().coordinate_dimension() * 8
    }

    fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
        writer.write_point(self)
    }
}

/// Curves with a body of bare points.
macro_rules! impl_points_body {
    ($struct_name:ty, $wkb_type:expr) => {
        impl WKBGeometry for $struct_name {
            fn wkb_type(&self) -> WKBType {
                $wkb_type
            }

            fn cs(&self) -> CoordinateSystem {
                self.coordinate_system()
            }

            fn body_size(&self) -> usize {
                points_size(&self.coordinate_system(), self.points())
            }

            fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
                writer.write_points(self.points())
            }
        }
    };
}

/// Surfaces with a body of bare rings.
macro_rules! impl_rings_body {
    ($struct_name:ty, $wkb_type:expr) => {
        impl WKBGeometry for $struct_name {
            fn wkb_type(&self) -> WKBType {
                $wkb_type
            }

            fn cs(&self) -> CoordinateSystem {
                self.coordinate_system()
            }

            fn body_size(&self) -> usize {
                rings_size(&self.coordinate_system(), self.rings())
            }

            fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
                writer.write_rings(self.rings())
            }
        }
    };
}

/// Geometries with a body of complete nested geometries.
macro_rules! impl_nested_body {
    ($struct_name:ty, $wkb_type:expr, $children:ident) => {
        impl WKBGeometry for $struct_name {
            fn wkb_type(&self) -> WKBType {
                $wkb_type
            }

            fn cs(&self) -> CoordinateSystem {
                self.coordinate_system()
            }

            fn body_size(&self) -> usize {
                nested_size(self.$children())
            }

            fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
                writer.write_children(self.$children())
            }
        }
    };
}

impl_points_body!(LineString, WKBType::LineString);
impl_points_body!(CircularString, WKBType::CircularString);
impl_rings_body!(Polygon, WKBType::Polygon);
impl_rings_body!(Triangle, WKBType::Triangle);
impl_nested_body!(CompoundCurve, WKBType::CompoundCurve, segments);
impl_nested_body!(CurvePolygon, WKBType::CurvePolygon, rings);
impl_nested_body!(MultiPoint, WKBType::MultiPoint, points);
impl_nested_body!(MultiLineString, WKBType::MultiLineString, line_strings);
impl_nested_body!(MultiPolygon, WKBType::MultiPolygon, polygons);
impl_nested_body!(GeometryCollection, WKBType::GeometryCollection, geometries);
impl_nested_body!(PolyhedralSurface, WKBType::PolyhedralSurface, patches);
impl_nested_body!(Tin, WKBType::Tin, patches);

impl WKBGeometry for CompoundCurveSegment {
    fn wkb_type(&self) -> WKBType {
        match self {
            Self::LineString(g) => g.wkb_type(),
            Self::CircularString(g) => g.wkb_type(),
        }
    }

    fn cs(&self) -> CoordinateSystem {
        self.coordinate_system()
    }

    fn body_size(&self) -> usize {
        match self {
            Self::LineString(g) => g.body_size(),
            Self::CircularString(g) => g.body_size(),
        }
    }

    fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
        match self {
            Self::LineString(g) => g.write_body(writer),
            Self::CircularString(g) => g.write_body(writer),
        }
    }
}

impl WKBGeometry for Curve {
    fn wkb_type(&self) -> WKBType {
        match self {
            Self::LineString(g) => g.wkb_type(),
            Self::CircularString(g) => g.wkb_type(),
            Self::CompoundCurve(g) => g.wkb_type(),
        }
    }

    fn cs(&self) -> CoordinateSystem {
        self.coordinate_system()
    }

    fn body_size(&self) -> usize {
        match self {
            Self::LineString(g) => g.body_size(),
            Self::CircularString(g) => g.body_size(),
            Self::CompoundCurve(g) => g.body_size(),
        }
    }

    fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
        match self {
            Self::LineString(g) => g.write_body(writer),
            Self::CircularString(g) => g.write_body(writer),
            Self::CompoundCurve(g) => g.write_body(writer),
        }
    }
}

impl WKBGeometry for Geometry {
    fn wkb_type(&self) -> WKBType {
        Geometry::wkb_type(self)
    }

    fn cs(&self) -> CoordinateSystem {
        self.coordinate_system()
    }

    fn body_size(&self) -> usize {
        use Geometry::*;
        match self {
            Point(g) => g.body_size(),
            LineString(g) => g.body_size(),
            CircularString(g) => g.body_size(),
            CompoundCurve(g) => g.body_size(),
            Polygon(g) => g.body_size(),
            CurvePolygon(g) => g.body_size(),
            MultiPoint(g) => g.body_size(),
            MultiLineString(g) => g.body_size(),
            MultiPolygon(g) => g.body_size(),
            GeometryCollection(g) => g.body_size(),
            PolyhedralSurface(g) => g.body_size(),
            Tin(g) => g.body_size(),
            Triangle(g) => g.body_size(),
        }
    }

    fn write_body<W: Write>(&self, writer: &mut WKBGeometryWriter<W>) -> Result<()> {
        use Geometry::*;
        match self {
            Point(g) => g.write_body(writer),
            LineString(g) => g.write_body(writer),
            CircularString(g) => g.write_body(writer),
            CompoundCurve(g) => g.write_body(writer),
            Polygon(g) => g.write_body(writer),
            CurvePolygon(g) => g.write_body(writer),
            MultiPoint(g) => g.write_body(writer),
            MultiLineString(g) => g.write_body(writer),
            MultiPolygon(g) => g.write_body(writer),
            GeometryCollection(g) => g.write_body(writer),
            PolyhedralSurface(g) => g.write_body(writer),
            Tin(g) => g.write_body(writer),
            Triangle(g) => g.write_body(writer),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::common::Endianness;
    use crate::test::curve::{cc0, curve_polygon0};
    use crate::test::linestring::ls_xyz;
    use crate::test::point::{p0, p_zm};
    use crate::test::polygon::{p1, triangle0};

    fn write(geom: &Geometry, options: WriterOptions) -> Vec<u8> {
        let mut out = vec![];
        WKBGeometryWriter::new(&mut out, options).write(geom).unwrap();
        out
    }

    fn code(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn point_xy() {
        let bytes = write(&Point::xy(1., 2.).into(), Default::default());
        let expected = [
            0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
        ];
        assert_eq!(bytes, expected.to_vec());
    }

    #[test]
    fn point_big_endian() {
        let options = WriterOptions::default().with_byte_order(Endianness::BigEndian);
        let bytes = write(&Point::xy(1., 2.).into(), options);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[1..5], &[0, 0, 0, 1]);
        assert_eq!(&bytes[5..13], &1.0f64.to_be_bytes());
    }

    #[test]
    fn iso_dimension_offsets() {
        let bytes = write(&ls_xyz().into(), Default::default());
        assert_eq!(code(&bytes, 1), 1002);

        let bytes = write(&Point::xym(1., 2., 3.).into(), Default::default());
        assert_eq!(code(&bytes, 1), 2001);

        let bytes = write(&p_zm().into(), Default::default());
        assert_eq!(code(&bytes, 1), 3001);
        assert_eq!(bytes.len(), 5 + 4 * 8);
    }

    #[test]
    fn ewkb_flags() {
        let options = WriterOptions::new(WkbDialect::Ewkb);
        let bytes = write(&p_zm().into(), options);
        assert_eq!(code(&bytes, 1), 0xC000_0001);

        let bytes = write(&p_zm().with_srid(4326).into(), options);
        assert_eq!(code(&bytes, 1), 0xE000_0001);
        assert_eq!(code(&bytes, 5), 4326);
    }

    #[test]
    fn ewkb_srid_only_at_outermost_geometry() {
        let cs = CoordinateSystem::xy(4326);
        let gc = GeometryCollection::new(cs, vec![p0().into()]).unwrap();
        let bytes = write(&gc.into(), WriterOptions::new(WkbDialect::Ewkb));

        assert_eq!(code(&bytes, 1), 0x2000_0007);
        assert_eq!(code(&bytes, 5), 4326);
        assert_eq!(code(&bytes, 9), 1);
        // nested point header
        assert_eq!(bytes[13], 0x01);
        assert_eq!(code(&bytes, 14), 1);
        assert_eq!(bytes.len(), 18 + 16);
    }

    #[test]
    fn iso_never_embeds_srid() {
        let geom: Geometry = p0().with_srid(4326).into();
        let bytes = write(&geom, WriterOptions::new(WkbDialect::Wkb));
        assert_eq!(code(&bytes, 1), 1);
        assert_eq!(bytes.len(), 21);
    }

    #[test]
    fn empty_point_as_nan() {
        let geom: Geometry = Point::empty(CoordinateSystem::xy(0)).into();
        let bytes = write(&geom, Default::default());
        assert_eq!(bytes.len(), 21);
        assert!(f64::from_le_bytes(bytes[5..13].try_into().unwrap()).is_nan());
        assert!(f64::from_le_bytes(bytes[13..21].try_into().unwrap()).is_nan());
    }

    #[test]
    fn polygon_rings_are_bare() {
        let bytes = write(&p1().into(), Default::default());
        // ring count, then the point count of the exterior ring
        assert_eq!(code(&bytes, 5), 2);
        assert_eq!(code(&bytes, 9), 5);
        assert_eq!(bytes.len(), 5 + 4 + (4 + 5 * 16) + (4 + 4 * 16));
    }

    #[test]
    fn wkb_size() {
        let cs = CoordinateSystem::xy(3857);
        let geoms: Vec<Geometry> = vec![
            p0().into(),
            p1().into(),
            triangle0().into(),
            cc0().into(),
            curve_polygon0().into(),
            GeometryCollection::new(cs, vec![cc0().into(), p1().into(), p0().into()])
                .unwrap()
                .into(),
            Tin::new(cs, vec![triangle0(), triangle0()]).unwrap().into(),
        ];
        for dialect in [WkbDialect::Wkb, WkbDialect::Ewkb] {
            let options = WriterOptions::new(dialect);
            for geom in &geoms {
                let bytes = write(geom, options);
                assert_eq!(geometry_wkb_size(geom, &options), bytes.len());
            }
        }
    }
}
