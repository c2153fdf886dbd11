use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::{adopt_children, NestedCoords, Point};

/// Validate the points of a curve against its coordinate system.
fn check_points(cs: &CoordinateSystem, points: Vec<Point>, kind: &str) -> Result<Vec<Point>> {
    if points.iter().any(Point::is_empty) {
        return Err(GeoError::invalid(format!(
            "a {kind} cannot contain empty points"
        )));
    }
    adopt_children(cs, points)
}

/// Accessors shared by the curves that are an ordered sequence of points.
macro_rules! impl_point_sequence {
    ($struct_name:ident) => {
        impl $struct_name {
            pub fn coordinate_system(&self) -> CoordinateSystem {
                self.cs
            }

            pub fn is_empty(&self) -> bool {
                self.points.is_empty()
            }

            pub fn points(&self) -> &[Point] {
                &self.points
            }

            pub fn num_points(&self) -> usize {
                self.points.len()
            }

            /// Returns the specified point, with 1-based indexing.
            pub fn point_n(&self, n: usize) -> Option<&Point> {
                n.checked_sub(1).and_then(|i| self.points.get(i))
            }

            pub fn start_point(&self) -> Option<&Point> {
                self.points.first()
            }

            pub fn end_point(&self) -> Option<&Point> {
                self.points.last()
            }

            /// Whether this curve is non-empty and its start and end points are equal.
            pub fn is_closed(&self) -> bool {
                match (self.start_point(), self.end_point()) {
                    (Some(start), Some(end)) => start.coords() == end.coords(),
                    _ => false,
                }
            }

            /// Returns a copy of this curve with the given SRID.
            pub fn with_srid(&self, srid: u32) -> Self {
                Self {
                    cs: self.cs.with_srid(srid),
                    points: self.points.iter().map(|p| p.with_srid(srid)).collect(),
                }
            }

            pub fn to_array(&self) -> NestedCoords {
                NestedCoords::Nested(self.points.iter().map(Point::to_array).collect())
            }
        }
    };
}

/// A curve with linear interpolation between its points.
///
/// See page 62 of <https://portal.ogc.org/files/?artifact_id=25355>.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    cs: CoordinateSystem,
    points: Vec<Point>,
}

impl LineString {
    pub const NAME: &'static str = "LineString";

    /// Create a new LineString. A non-empty LineString needs at least two points.
    pub fn new(cs: CoordinateSystem, points: Vec<Point>) -> Result<Self> {
        let points = check_points(&cs, points, Self::NAME)?;
        if points.len() == 1 {
            return Err(GeoError::invalid(
                "a LineString must be composed of at least 2 points",
            ));
        }
        Ok(Self { cs, points })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, points: vec![] }
    }
}

impl_point_sequence!(LineString);

/// A curve made of circular arcs, each defined by three consecutive points.
///
/// The end point of each arc is the start point of the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularString {
    cs: CoordinateSystem,
    points: Vec<Point>,
}

impl CircularString {
    pub const NAME: &'static str = "CircularString";

    /// Create a new CircularString. A non-empty CircularString needs an odd number of points,
    /// and at least three.
    pub fn new(cs: CoordinateSystem, points: Vec<Point>) -> Result<Self> {
        let points = check_points(&cs, points, Self::NAME)?;
        if points.is_empty() {
            return Ok(Self { cs, points });
        }
        if points.len() < 3 {
            return Err(GeoError::invalid(
                "a CircularString must be made of at least 3 points",
            ));
        }
        if points.len() % 2 == 0 {
            return Err(GeoError::invalid(
                "a CircularString must have an odd number of points",
            ));
        }
        Ok(Self { cs, points })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, points: vec![] }
    }
}

impl_point_sequence!(CircularString);
