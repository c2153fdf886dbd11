use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::{adopt_children, Curve, NestedCoords};

/// A planar surface whose rings may be any closed [`Curve`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePolygon {
    cs: CoordinateSystem,
    rings: Vec<Curve>,
}

impl CurvePolygon {
    pub const NAME: &'static str = "CurvePolygon";

    pub fn new(cs: CoordinateSystem, rings: Vec<Curve>) -> Result<Self> {
        for (i, ring) in rings.iter().enumerate() {
            if ring.is_empty() || !ring.is_closed() {
                return Err(GeoError::invalid(format!(
                    "ring {} of a CurvePolygon must be a non-empty closed curve",
                    i + 1
                )));
            }
        }
        let rings = adopt_children(&cs, rings)?;
        Ok(Self { cs, rings })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, rings: vec![] }
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(&self) -> &[Curve] {
        &self.rings
    }

    pub fn exterior_ring(&self) -> Option<&Curve> {
        self.rings.first()
    }

    pub fn num_interior_rings(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// Returns the specified interior ring, with 1-based indexing.
    pub fn interior_ring_n(&self, n: usize) -> Option<&Curve> {
        if n == 0 {
            return None;
        }
        self.rings.get(n)
    }

    pub fn with_srid(&self, srid: u32) -> Self {
        Self {
            cs: self.cs.with_srid(srid),
            rings: self.rings.iter().map(|r| r.with_srid(srid)).collect(),
        }
    }

    pub fn to_array(&self) -> NestedCoords {
        NestedCoords::Nested(self.rings.iter().map(Curve::to_array).collect())
    }
}
