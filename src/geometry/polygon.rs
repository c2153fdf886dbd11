use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::{adopt_children, LineString, NestedCoords};

/// Validate the rings of a polygon-like geometry against its coordinate system.
fn check_rings(
    cs: &CoordinateSystem,
    rings: Vec<LineString>,
    kind: &str,
) -> Result<Vec<LineString>> {
    for (i, ring) in rings.iter().enumerate() {
        if ring.is_empty() {
            return Err(GeoError::invalid(format!(
                "ring {} of a {kind} is empty",
                i + 1
            )));
        }
        if !ring.is_closed() {
            return Err(GeoError::invalid(format!(
                "ring {} of a {kind} is not closed",
                i + 1
            )));
        }
    }
    adopt_children(cs, rings)
}

macro_rules! impl_ring_accessors {
    ($struct_name:ident) => {
        impl $struct_name {
            pub fn coordinate_system(&self) -> CoordinateSystem {
                self.cs
            }

            pub fn is_empty(&self) -> bool {
                self.rings.is_empty()
            }

            /// All rings, starting with the exterior ring.
            pub fn rings(&self) -> &[LineString] {
                &self.rings
            }

            pub fn exterior_ring(&self) -> Option<&LineString> {
                self.rings.first()
            }

            pub fn interior_rings(&self) -> &[LineString] {
                self.rings.get(1..).unwrap_or_default()
            }

            pub fn num_interior_rings(&self) -> usize {
                self.rings.len().saturating_sub(1)
            }

            /// Returns the specified interior ring, with 1-based indexing.
            pub fn interior_ring_n(&self, n: usize) -> Option<&LineString> {
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
                NestedCoords::Nested(self.rings.iter().map(LineString::to_array).collect())
            }
        }
    };
}

/// A planar surface bounded by one exterior ring and zero or more interior rings.
///
/// See page 64 of <https://portal.ogc.org/files/?artifact_id=25355>.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    cs: CoordinateSystem,
    rings: Vec<LineString>,
}

impl Polygon {
    pub const NAME: &'static str = "Polygon";

    /// Create a new Polygon. The first ring is the exterior ring, and every ring must be closed.
    pub fn new(cs: CoordinateSystem, rings: Vec<LineString>) -> Result<Self> {
        let rings = check_rings(&cs, rings, Self::NAME)?;
        Ok(Self { cs, rings })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, rings: vec![] }
    }
}

impl_ring_accessors!(Polygon);

/// A polygon whose only ring is a closed ring of exactly 4 points (3 vertices + 1).
///
/// Vertices are not checked for distinctness.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    cs: CoordinateSystem,
    rings: Vec<LineString>,
}

impl Triangle {
    pub const NAME: &'static str = "Triangle";

    pub fn new(cs: CoordinateSystem, rings: Vec<LineString>) -> Result<Self> {
        let rings = check_rings(&cs, rings, Self::NAME)?;
        if rings.len() > 1 {
            return Err(GeoError::invalid("a Triangle must not have interior rings"));
        }
        if let Some(exterior) = rings.first() {
            if exterior.num_points() != 4 {
                return Err(GeoError::invalid(format!(
                    "a Triangle must have exactly 4 (3 + 1) points, got {}",
                    exterior.num_points()
                )));
            }
        }
        Ok(Self { cs, rings })
    }

    pub fn empty(cs: CoordinateSystem) -> Self {
        Self { cs, rings: vec![] }
    }
}

impl_ring_accessors!(Triangle);
