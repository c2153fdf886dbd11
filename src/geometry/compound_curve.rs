use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::{adopt_children, CompoundCurveSegment, NestedCoords, Point};

/// A curve made of contiguous LineString and CircularString segments.
///
/// The end point of every segment is the start point of the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCurve {
    cs: CoordinateSystem,
    segments: Vec<CompoundCurveSegment>,
}

impl CompoundCurve {
    pub const NAME: &'static str = "CompoundCurve";

    pub fn new(cs: CoordinateSystem, segments: Vec<CompoundCurveSegment>) -> Result<Self> {
        if segments.iter().any(CompoundCurveSegment::is_empty) {
            return Err(GeoError::invalid(
                "a CompoundCurve cannot contain empty segments",
            ));
        }
        let segments = adopt_children(&cs, segments)?;

        for (i, pair) in segments.windows(2).enumerate() {
            let end = pair[0].end_point().map(Point::coords);
            let start = pair[1].start_point().map(Point::coords);
            if end != start {
                return Err(GeoError::invalid(format!(
                    "incontinuous CompoundCurve: segment {} does not start where segment {} ends",
                    i + 2,
                    i + 1
                )));
            }
        }

        Ok(Self { cs, segments })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self {
            cs,
            segments: vec![],
        }
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[CompoundCurveSegment] {
        &self.segments
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Returns the specified segment, with 1-based indexing.
    pub fn segment_n(&self, n: usize) -> Option<&CompoundCurveSegment> {
        n.checked_sub(1).and_then(|i| self.segments.get(i))
    }

    pub fn start_point(&self) -> Option<&Point> {
        self.segments.first().and_then(|s| s.start_point())
    }

    pub fn end_point(&self) -> Option<&Point> {
        self.segments.last().and_then(|s| s.end_point())
    }

    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.coords() == end.coords(),
            _ => false,
        }
    }

    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            cs: self.cs.with_srid(srid),
            segments: self.segments.iter().map(|s| s.with_srid(srid)).collect(),
        }
    }

    pub fn to_array(&self) -> NestedCoords {
        NestedCoords::Nested(
            self.segments
                .iter()
                .map(CompoundCurveSegment::to_array)
                .collect(),
        )
    }
}
