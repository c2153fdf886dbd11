//! The geometry value tree: one owned, immutable struct per Simple Features kind, and the
//! [`Geometry`] enum over all of them.
//!
//! Composite geometries exclusively own their children. Every constructor validates the
//! structural rules of its kind (point counts, ring closure, curve continuity) and that all
//! children share the dimensionality of their parent. Children adopt the SRID of their parent.

use serde::Serialize;

pub use collection::{
    GeometryCollection, MultiLineString, MultiPoint, MultiPolygon, PolyhedralSurface, Tin,
};
pub use compound_curve::CompoundCurve;
pub use curve::{CompoundCurveSegment, Curve};
pub use curve_polygon::CurvePolygon;
pub use linestring::{CircularString, LineString};
pub use point::Point;
pub use polygon::{Polygon, Triangle};

mod collection;
mod compound_curve;
mod curve;
mod curve_polygon;
mod linestring;
mod point;
mod polygon;

use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::io::wkb::WKBType;

/// Nested numeric sequences mirroring the shape of a geometry tree.
///
/// Serializes to plain nested arrays, e.g. `[[0.0, 0.0], [1.0, 1.0]]` for a LineString.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedCoords {
    /// The ordinates of a single point.
    Coords(Vec<f64>),
    /// The arrays of child geometries.
    Nested(Vec<NestedCoords>),
}

/// A Simple Features geometry of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
    Polygon(Polygon),
    CurvePolygon(CurvePolygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
    Triangle(Triangle),
}

/// Apply the same expression to whichever geometry a [`Geometry`] holds.
macro_rules! dispatch {
    ($value:expr, $geom:ident => $body:expr) => {
        match $value {
            Geometry::Point($geom) => $body,
            Geometry::LineString($geom) => $body,
            Geometry::CircularString($geom) => $body,
            Geometry::CompoundCurve($geom) => $body,
            Geometry::Polygon($geom) => $body,
            Geometry::CurvePolygon($geom) => $body,
            Geometry::MultiPoint($geom) => $body,
            Geometry::MultiLineString($geom) => $body,
            Geometry::MultiPolygon($geom) => $body,
            Geometry::GeometryCollection($geom) => $body,
            Geometry::PolyhedralSurface($geom) => $body,
            Geometry::Tin($geom) => $body,
            Geometry::Triangle($geom) => $body,
        }
    };
}

impl Geometry {
    pub fn coordinate_system(&self) -> CoordinateSystem {
        dispatch!(self, g => g.coordinate_system())
    }

    pub fn srid(&self) -> u32 {
        self.coordinate_system().srid()
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, g => g.is_empty())
    }

    pub fn is_3d(&self) -> bool {
        self.coordinate_system().has_z()
    }

    pub fn is_measured(&self) -> bool {
        self.coordinate_system().has_m()
    }

    pub fn coordinate_dimension(&self) -> usize {
        self.coordinate_system().coordinate_dimension()
    }

    pub fn spatial_dimension(&self) -> usize {
        self.coordinate_system().spatial_dimension()
    }

    /// The OGC name of this geometry's kind, e.g. `"LineString"`.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point(_) => Point::NAME,
            Geometry::LineString(_) => LineString::NAME,
            Geometry::CircularString(_) => CircularString::NAME,
            Geometry::CompoundCurve(_) => CompoundCurve::NAME,
            Geometry::Polygon(_) => Polygon::NAME,
            Geometry::CurvePolygon(_) => CurvePolygon::NAME,
            Geometry::MultiPoint(_) => MultiPoint::NAME,
            Geometry::MultiLineString(_) => MultiLineString::NAME,
            Geometry::MultiPolygon(_) => MultiPolygon::NAME,
            Geometry::GeometryCollection(_) => GeometryCollection::NAME,
            Geometry::PolyhedralSurface(_) => PolyhedralSurface::NAME,
            Geometry::Tin(_) => Tin::NAME,
            Geometry::Triangle(_) => Triangle::NAME,
        }
    }

    /// The base WKB type of this geometry, without any dimension or SRID information.
    pub fn wkb_type(&self) -> WKBType {
        match self {
            Geometry::Point(_) => WKBType::Point,
            Geometry::LineString(_) => WKBType::LineString,
            Geometry::CircularString(_) => WKBType::CircularString,
            Geometry::CompoundCurve(_) => WKBType::CompoundCurve,
            Geometry::Polygon(_) => WKBType::Polygon,
            Geometry::CurvePolygon(_) => WKBType::CurvePolygon,
            Geometry::MultiPoint(_) => WKBType::MultiPoint,
            Geometry::MultiLineString(_) => WKBType::MultiLineString,
            Geometry::MultiPolygon(_) => WKBType::MultiPolygon,
            Geometry::GeometryCollection(_) => WKBType::GeometryCollection,
            Geometry::PolyhedralSurface(_) => WKBType::PolyhedralSurface,
            Geometry::Tin(_) => WKBType::Tin,
            Geometry::Triangle(_) => WKBType::Triangle,
        }
    }

    /// The topological dimension: 0 for points, 1 for curves, 2 for surfaces.
    ///
    /// A GeometryCollection has the largest dimension of its children.
    pub fn dimension(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_)
            | Geometry::CircularString(_)
            | Geometry::CompoundCurve(_)
            | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_)
            | Geometry::CurvePolygon(_)
            | Geometry::MultiPolygon(_)
            | Geometry::PolyhedralSurface(_)
            | Geometry::Tin(_)
            | Geometry::Triangle(_) => 2,
            Geometry::GeometryCollection(gc) => gc.dimension(),
        }
    }

    /// Returns a copy of this geometry with the SRID applied to the whole tree.
    pub fn with_srid(&self, srid: u32) -> Self {
        dispatch!(self, g => g.with_srid(srid).into())
    }

    pub fn to_array(&self) -> NestedCoords {
        dispatch!(self, g => g.to_array())
    }
}

/// A geometry that can be owned by a composite geometry.
pub(crate) trait GeometryNode: Sized {
    fn coordinate_system(&self) -> CoordinateSystem;

    fn with_srid(&self, srid: u32) -> Self;
}

macro_rules! impl_geometry_node {
    ($($struct_name:ty),+ $(,)?) => {
        $(
            impl GeometryNode for $struct_name {
                fn coordinate_system(&self) -> CoordinateSystem {
                    <$struct_name>::coordinate_system(self)
                }

                fn with_srid(&self, srid: u32) -> Self {
                    <$struct_name>::with_srid(self, srid)
                }
            }
        )+
    };
}

impl_geometry_node!(
    Geometry,
    Point,
    LineString,
    CircularString,
    CompoundCurve,
    CompoundCurveSegment,
    Curve,
    Polygon,
    CurvePolygon,
    Triangle,
);

/// Check that a child geometry has the same Z and M flags as its parent.
pub(crate) fn check_dimension(parent: &CoordinateSystem, child: &CoordinateSystem) -> Result<()> {
    if parent.same_dimension(child) {
        Ok(())
    } else {
        Err(GeoError::DimensionMismatch {
            expected: parent.dimension(),
            found: child.dimension(),
        })
    }
}

/// Check the dimensionality of every child, and give each child the SRID of its parent.
pub(crate) fn adopt_children<T: GeometryNode>(
    cs: &CoordinateSystem,
    children: Vec<T>,
) -> Result<Vec<T>> {
    children
        .into_iter()
        .map(|child| {
            let child_cs = child.coordinate_system();
            check_dimension(cs, &child_cs)?;
            if child_cs.srid() == cs.srid() {
                Ok(child)
            } else {
                Ok(child.with_srid(cs.srid()))
            }
        })
        .collect()
}

macro_rules! impl_conversions {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }

            impl TryFrom<Geometry> for $variant {
                type Error = GeoError;

                fn try_from(value: Geometry) -> std::result::Result<Self, Self::Error> {
                    match value {
                        Geometry::$variant(g) => Ok(g),
                        other => Err(GeoError::UnexpectedGeometryType {
                            expected: $variant::NAME,
                            found: other.geometry_type(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_conversions!(
    Point,
    LineString,
    CircularString,
    CompoundCurve,
    Polygon,
    CurvePolygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    PolyhedralSurface,
    Tin,
    Triangle,
);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::test::curve::curve_polygon0;
    use crate::test::linestring::ls0;
    use crate::test::point::p0;
    use crate::test::polygon::{p0 as poly0, triangle0};

    #[test]
    fn common_accessors() {
        let geom: Geometry = Point::xyz(1., 2., 3.).with_srid(4326).into();
        assert!(geom.is_3d());
        assert!(!geom.is_measured());
        assert_eq!(geom.srid(), 4326);
        assert_eq!(geom.geometry_type(), "Point");
        assert_eq!(geom.coordinate_dimension(), 3);
        assert_eq!(geom.spatial_dimension(), 3);
        assert_eq!(geom.dimension(), 0);
    }

    #[test]
    fn topological_dimension() {
        assert_eq!(Geometry::from(ls0()).dimension(), 1);
        assert_eq!(Geometry::from(poly0()).dimension(), 2);
        assert_eq!(Geometry::from(triangle0()).dimension(), 2);
        assert_eq!(Geometry::from(curve_polygon0()).dimension(), 2);
    }

    #[test]
    fn with_srid_recurses() {
        let cs = CoordinateSystem::xy(0);
        let gc = GeometryCollection::new(cs, vec![p0().into(), ls0().into()]).unwrap();
        let geom = Geometry::from(gc).with_srid(2154);

        let Geometry::GeometryCollection(gc) = geom else {
            panic!("expected a GeometryCollection");
        };
        assert_eq!(gc.coordinate_system().srid(), 2154);
        for child in gc.geometries() {
            assert_eq!(child.srid(), 2154);
        }
        let Geometry::LineString(ls) = &gc.geometries()[1] else {
            panic!("expected a LineString");
        };
        assert_eq!(ls.points()[0].coordinate_system().srid(), 2154);
    }

    #[test]
    fn try_from_geometry() {
        let geom = Geometry::from(ls0());
        assert_eq!(LineString::try_from(geom.clone()).unwrap(), ls0());

        let err = Point::try_from(geom.clone()).unwrap_err();
        assert!(matches!(
            err,
            GeoError::UnexpectedGeometryType {
                expected: "Point",
                found: "LineString"
            }
        ));
        assert!(Curve::try_from(geom).is_ok());
        assert!(CompoundCurveSegment::try_from(Geometry::from(poly0())).is_err());
    }

    #[test]
    fn nested_to_array() {
        let cs = CoordinateSystem::xy(0);
        let gc = GeometryCollection::new(cs, vec![p0().into(), Point::empty(cs).into()]).unwrap();
        assert_eq!(
            serde_json::to_value(Geometry::from(gc).to_array()).unwrap(),
            json!([[0.0, 1.0], []])
        );
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Geometry>();
    }
}
