use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::NestedCoords;

/// A single location, with 2 to 4 ordinates depending on its [`CoordinateSystem`].
///
/// A point without coordinates is empty.
///
/// See page 61 of <https://portal.ogc.org/files/?artifact_id=25355>.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    cs: CoordinateSystem,

    /// Ordinates in XYZM order. Slots beyond the coordinate dimension are always zero.
    coords: Option<[f64; 4]>,
}

impl Point {
    pub const NAME: &'static str = "Point";

    /// Create a new point from its ordinates.
    ///
    /// An empty slice creates an empty point, otherwise the number of ordinates must match the
    /// coordinate dimension of `cs`.
    pub fn new(cs: CoordinateSystem, coords: &[f64]) -> Result<Self> {
        if coords.is_empty() {
            return Ok(Self::empty(cs));
        }

        let dim = cs.coordinate_dimension();
        if coords.len() != dim {
            return Err(GeoError::invalid(format!(
                "expected {} coordinates for a {} point, got {}",
                dim,
                cs.dimension(),
                coords.len()
            )));
        }

        let mut buf = [0.0; 4];
        buf[..dim].copy_from_slice(coords);
        Ok(Self {
            cs,
            coords: Some(buf),
        })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, coords: None }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            cs: CoordinateSystem::xy(0),
            coords: Some([x, y, 0.0, 0.0]),
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            cs: CoordinateSystem::xyz(0),
            coords: Some([x, y, z, 0.0]),
        }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            cs: CoordinateSystem::xym(0),
            coords: Some([x, y, m, 0.0]),
        }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            cs: CoordinateSystem::xyzm(0),
            coords: Some([x, y, z, m]),
        }
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_none()
    }

    /// The ordinates of this point, in XYZM order. Empty if the point is empty.
    pub fn coords(&self) -> &[f64] {
        match &self.coords {
            Some(coords) => &coords[..self.cs.coordinate_dimension()],
            None => &[],
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.coords.map(|c| c[0])
    }

    pub fn y(&self) -> Option<f64> {
        self.coords.map(|c| c[1])
    }

    pub fn z(&self) -> Option<f64> {
        if !self.cs.has_z() {
            return None;
        }
        self.coords.map(|c| c[2])
    }

    pub fn m(&self) -> Option<f64> {
        if !self.cs.has_m() {
            return None;
        }
        let idx = if self.cs.has_z() { 3 } else { 2 };
        self.coords.map(|c| c[idx])
    }

    /// Returns a copy of this point with the given SRID.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            cs: self.cs.with_srid(srid),
            coords: self.coords,
        }
    }

    /// Whether every ordinate of this non-empty point is NaN.
    pub(crate) fn is_nan(&self) -> bool {
        !self.is_empty() && self.coords().iter().all(|c| c.is_nan())
    }

    pub fn to_array(&self) -> NestedCoords {
        NestedCoords::Coords(self.coords().to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let p = Point::xyzm(1., 2., 3., 4.);
        assert_eq!(p.x(), Some(1.));
        assert_eq!(p.y(), Some(2.));
        assert_eq!(p.z(), Some(3.));
        assert_eq!(p.m(), Some(4.));
        assert_eq!(p.coords(), &[1., 2., 3., 4.]);

        let p = Point::xym(1., 2., 5.);
        assert_eq!(p.z(), None);
        assert_eq!(p.m(), Some(5.));
    }

    #[test]
    fn wrong_arity() {
        let err = Point::new(CoordinateSystem::xyz(0), &[1., 2.]).unwrap_err();
        assert!(matches!(err, GeoError::StructuralInvariantViolation(_)));
    }

    #[test]
    fn empty_point() {
        let p = Point::new(CoordinateSystem::xy(4326), &[]).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.x(), None);
        assert!(p.coords().is_empty());
        assert_eq!(p.coordinate_system().srid(), 4326);
        assert!(!p.is_nan());
    }

    #[test]
    fn nan_point() {
        let p = Point::xy(f64::NAN, f64::NAN);
        assert!(!p.is_empty());
        assert!(p.is_nan());
        assert!(!Point::xy(f64::NAN, 1.).is_nan());
    }
}
