//! Coordinate dimensionality and the [`CoordinateSystem`] carried by every geometry.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The dimension of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build a dimension from the presence of Z and M ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The dimensionality and spatial reference of a geometry.
///
/// A coordinate system is an immutable value. Every geometry in a tree shares the Z and M flags
/// of its root, while the SRID of a nested geometry may be inherited from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CoordinateSystem {
    has_z: bool,
    has_m: bool,
    srid: u32,
}

impl CoordinateSystem {
    pub fn new(has_z: bool, has_m: bool, srid: u32) -> Self {
        Self { has_z, has_m, srid }
    }

    /// A 2D coordinate system.
    pub fn xy(srid: u32) -> Self {
        Self::new(false, false, srid)
    }

    /// A coordinate system with Z ordinates.
    pub fn xyz(srid: u32) -> Self {
        Self::new(true, false, srid)
    }

    /// A coordinate system with M ordinates.
    pub fn xym(srid: u32) -> Self {
        Self::new(false, true, srid)
    }

    /// A coordinate system with both Z and M ordinates.
    pub fn xyzm(srid: u32) -> Self {
        Self::new(true, true, srid)
    }

    pub fn from_dimension(dim: Dimension, srid: u32) -> Self {
        Self::new(dim.has_z(), dim.has_m(), srid)
    }

    pub fn has_z(&self) -> bool {
        self.has_z
    }

    pub fn has_m(&self) -> bool {
        self.has_m
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.has_z, self.has_m)
    }

    /// The number of ordinates in each coordinate: 2, 3 or 4.
    pub fn coordinate_dimension(&self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_m)
    }

    /// The number of spatial ordinates in each coordinate: 2 or 3.
    pub fn spatial_dimension(&self) -> usize {
        2 + usize::from(self.has_z)
    }

    /// Returns a copy of this coordinate system with a different SRID.
    pub fn with_srid(&self, srid: u32) -> Self {
        Self { srid, ..*self }
    }

    /// Whether both coordinate systems have the same Z and M flags, regardless of SRID.
    pub fn same_dimension(&self, other: &CoordinateSystem) -> bool {
        self.has_z == other.has_z && self.has_m == other.has_m
    }
}
