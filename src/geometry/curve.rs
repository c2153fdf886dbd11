use crate::datatypes::CoordinateSystem;
use crate::error::GeoError;
use crate::geometry::{CircularString, CompoundCurve, Geometry, LineString, NestedCoords, Point};

/// A segment of a [`CompoundCurve`].
#[derive(Debug, Clone, PartialEq)]
pub enum CompoundCurveSegment {
    LineString(LineString),
    CircularString(CircularString),
}

impl CompoundCurveSegment {
    pub(crate) const EXPECTED: &'static str = "LineString or CircularString";

    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            Self::LineString(g) => g.coordinate_system(),
            Self::CircularString(g) => g.coordinate_system(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::LineString(g) => g.is_empty(),
            Self::CircularString(g) => g.is_empty(),
        }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Self::LineString(g) => g.points(),
            Self::CircularString(g) => g.points(),
        }
    }

    pub fn start_point(&self) -> Option<&Point> {
        self.points().first()
    }

    pub fn end_point(&self) -> Option<&Point> {
        self.points().last()
    }

    pub fn with_srid(&self, srid: u32) -> Self {
        match self {
            Self::LineString(g) => Self::LineString(g.with_srid(srid)),
            Self::CircularString(g) => Self::CircularString(g.with_srid(srid)),
        }
    }

    pub fn to_array(&self) -> NestedCoords {
        match self {
            Self::LineString(g) => g.to_array(),
            Self::CircularString(g) => g.to_array(),
        }
    }
}

impl From<LineString> for CompoundCurveSegment {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<CircularString> for CompoundCurveSegment {
    fn from(value: CircularString) -> Self {
        Self::CircularString(value)
    }
}

impl From<CompoundCurveSegment> for Geometry {
    fn from(value: CompoundCurveSegment) -> Self {
        match value {
            CompoundCurveSegment::LineString(g) => Geometry::LineString(g),
            CompoundCurveSegment::CircularString(g) => Geometry::CircularString(g),
        }
    }
}

impl TryFrom<Geometry> for CompoundCurveSegment {
    type Error = GeoError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(g) => Ok(Self::LineString(g)),
            Geometry::CircularString(g) => Ok(Self::CircularString(g)),
            other => Err(GeoError::UnexpectedGeometryType {
                expected: Self::EXPECTED,
                found: other.geometry_type(),
            }),
        }
    }
}

/// Any one-dimensional geometry that can bound a [`CurvePolygon`][crate::geometry::CurvePolygon].
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    LineString(LineString),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
}

impl Curve {
    pub(crate) const EXPECTED: &'static str = "LineString, CircularString or CompoundCurve";

    pub fn coordinate_system(&self) -> CoordinateSystem {
        match self {
            Self::LineString(g) => g.coordinate_system(),
            Self::CircularString(g) => g.coordinate_system(),
            Self::CompoundCurve(g) => g.coordinate_system(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::LineString(g) => g.is_empty(),
            Self::CircularString(g) => g.is_empty(),
            Self::CompoundCurve(g) => g.is_empty(),
        }
    }

    pub fn start_point(&self) -> Option<&Point> {
        match self {
            Self::LineString(g) => g.start_point(),
            Self::CircularString(g) => g.start_point(),
            Self::CompoundCurve(g) => g.start_point(),
        }
    }

    pub fn end_point(&self) -> Option<&Point> {
        match self {
            Self::LineString(g) => g.end_point(),
            Self::CircularString(g) => g.end_point(),
            Self::CompoundCurve(g) => g.end_point(),
        }
    }

    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.coords() == end.coords(),
            _ => false,
        }
    }

    pub fn with_srid(&self, srid: u32) -> Self {
        match self {
            Self::LineString(g) => Self::LineString(g.with_srid(srid)),
            Self::CircularString(g) => Self::CircularString(g.with_srid(srid)),
            Self::CompoundCurve(g) => Self::CompoundCurve(g.with_srid(srid)),
        }
    }

    pub fn to_array(&self) -> NestedCoords {
        match self {
            Self::LineString(g) => g.to_array(),
            Self::CircularString(g) => g.to_array(),
            Self::CompoundCurve(g) => g.to_array(),
        }
    }
}

impl From<LineString> for Curve {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<CircularString> for Curve {
    fn from(value: CircularString) -> Self {
        Self::CircularString(value)
    }
}

impl From<CompoundCurve> for Curve {
    fn from(value: CompoundCurve) -> Self {
        Self::CompoundCurve(value)
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(g) => Geometry::LineString(g),
            Curve::CircularString(g) => Geometry::CircularString(g),
            Curve::CompoundCurve(g) => Geometry::CompoundCurve(g),
        }
    }
}

impl TryFrom<Geometry> for Curve {
    type Error = GeoError;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::LineString(g) => Ok(Self::LineString(g)),
            Geometry::CircularString(g) => Ok(Self::CircularString(g)),
            Geometry::CompoundCurve(g) => Ok(Self::CompoundCurve(g)),
            other => Err(GeoError::UnexpectedGeometryType {
                expected: Self::EXPECTED,
                found: other.geometry_type(),
            }),
        }
    }
}
