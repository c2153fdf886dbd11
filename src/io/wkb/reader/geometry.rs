use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::{
    check_dimension, CircularString, CompoundCurve, CompoundCurveSegment, Curve, CurvePolygon,
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, PolyhedralSurface, Tin, Triangle,
};
use crate::io::wkb::common::WKBType;
use crate::io::wkb::options::ReaderOptions;
use crate::io::wkb::reader::buffer::WKBBuffer;

/// The smallest possible encoding of a nested geometry: byte order, type code and a count.
const MIN_NESTED_SIZE: usize = 1 + 4 + 4;

/// A geometry kind that can be found nested inside another geometry.
trait NestedGeometry: Sized {
    fn from_geometry(geom: Geometry) -> Result<Self>;
}

impl NestedGeometry for Geometry {
    fn from_geometry(geom: Geometry) -> Result<Self> {
        Ok(geom)
    }
}

macro_rules! impl_nested_geometry {
    ($($struct_name:ty),+ $(,)?) => {
        $(
            impl NestedGeometry for $struct_name {
                fn from_geometry(geom: Geometry) -> Result<Self> {
                    <$struct_name>::try_from(geom)
                }
            }
        )+
    };
}

impl_nested_geometry!(Point, LineString, Polygon, Triangle, Curve, CompoundCurveSegment);

/// Recursive-descent decoder of WKB geometries.
///
/// Points inside curves and rings inside polygons are bare coordinate data, while the children
/// of collections, compound curves and curve polygons are complete geometries with their own
/// header.
pub(crate) struct WKBGeometryReader<'a> {
    buf: WKBBuffer<'a>,
    options: ReaderOptions,
}

impl<'a> WKBGeometryReader<'a> {
    pub fn new(buf: &'a [u8], options: ReaderOptions) -> Self {
        Self {
            buf: WKBBuffer::new(buf),
            options,
        }
    }

    /// The number of bytes left after the last geometry read.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Read one complete geometry, header included.
    ///
    /// `srid` is the SRID inherited by the geometry if its header does not embed one, and
    /// `depth` the nesting level of the geometry, 0 for the outermost one.
    pub fn read_geometry(&mut self, srid: u32, depth: usize) -> Result<Geometry> {
        if depth > self.options.max_depth {
            return Err(GeoError::MaxDepthExceeded(self.options.max_depth));
        }

        self.buf.read_byte_order()?;
        let header = self.options.dialect.read_header(&mut self.buf, srid)?;
        let cs = header.coordinate_system();

        let geom = match header.wkb_type()? {
            WKBType::Point => {
                let point = self.read_point(cs)?;
                if self.options.nan_point_as_empty && point.is_nan() {
                    Point::empty(cs).into()
                } else {
                    point.into()
                }
            }
            WKBType::LineString => self.read_line_string(cs)?.into(),
            WKBType::CircularString => {
                let points = self.read_points(cs)?;
                CircularString::new(cs, points)?.into()
            }
            WKBType::CompoundCurve => {
                let segments = self.read_children(cs, depth)?;
                CompoundCurve::new(cs, segments)?.into()
            }
            WKBType::Polygon => {
                let rings = self.read_rings(cs)?;
                Polygon::new(cs, rings)?.into()
            }
            WKBType::CurvePolygon => {
                let rings = self.read_children(cs, depth)?;
                CurvePolygon::new(cs, rings)?.into()
            }
            WKBType::MultiPoint => {
                let points = self.read_children(cs, depth)?;
                MultiPoint::new(cs, points)?.into()
            }
            WKBType::MultiLineString => {
                let line_strings = self.read_children(cs, depth)?;
                MultiLineString::new(cs, line_strings)?.into()
            }
            WKBType::MultiPolygon => {
                let polygons = self.read_children(cs, depth)?;
                MultiPolygon::new(cs, polygons)?.into()
            }
            WKBType::GeometryCollection => {
                let geometries = self.read_children(cs, depth)?;
                GeometryCollection::new(cs, geometries)?.into()
            }
            WKBType::PolyhedralSurface => {
                let patches = self.read_children(cs, depth)?;
                PolyhedralSurface::new(cs, patches)?.into()
            }
            WKBType::Tin => {
                let patches = self.read_children(cs, depth)?;
                Tin::new(cs, patches)?.into()
            }
            WKBType::Triangle => {
                let rings = self.read_rings(cs)?;
                Triangle::new(cs, rings)?.into()
            }
            WKBType::MultiCurve | WKBType::MultiSurface | WKBType::Curve | WKBType::Surface => {
                return Err(GeoError::UnsupportedType(header.code));
            }
        };
        Ok(geom)
    }

    /// Read the bare coordinates of a point.
    fn read_point(&mut self, cs: CoordinateSystem) -> Result<Point> {
        let dim = cs.coordinate_dimension();
        let mut coords = [0.0; 4];
        self.buf.read_doubles(&mut coords[..dim])?;
        Point::new(cs, &coords[..dim])
    }

    /// Read a point count followed by that many bare points.
    fn read_points(&mut self, cs: CoordinateSystem) -> Result<Vec<Point>> {
        let num_points = self.buf.read_count(cs.coordinate_dimension() * 8)?;
        (0..num_points).map(|_| self.read_point(cs)).collect()
    }

    fn read_line_string(&mut self, cs: CoordinateSystem) -> Result<LineString> {
        let points = self.read_points(cs)?;
        LineString::new(cs, points)
    }

    /// Read a ring count followed by that many bare rings.
    fn read_rings(&mut self, cs: CoordinateSystem) -> Result<Vec<LineString>> {
        let num_rings = self.buf.read_count(4)?;
        (0..num_rings).map(|_| self.read_line_string(cs)).collect()
    }

    /// Read a count followed by that many complete geometries of the kind `T`.
    ///
    /// Children inherit the resolved SRID of their parent, and must have its dimensionality.
    fn read_children<T: NestedGeometry>(
        &mut self,
        cs: CoordinateSystem,
        depth: usize,
    ) -> Result<Vec<T>> {
        let num_children = self.buf.read_count(MIN_NESTED_SIZE)?;
        let byte_order = self.buf.byte_order();

        let mut children = Vec::with_capacity(num_children);
        for _ in 0..num_children {
            let child = self.read_geometry(cs.srid(), depth + 1)?;
            check_dimension(&cs, &child.coordinate_system())?;
            children.push(T::from_geometry(child)?);
        }

        self.buf.set_byte_order(byte_order);
        Ok(children)
    }
}
