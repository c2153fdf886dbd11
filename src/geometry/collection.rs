use crate::datatypes::CoordinateSystem;
use crate::error::Result;
use crate::geometry::{adopt_children, Geometry, LineString, NestedCoords, Point, Polygon, Triangle};

/// Define a geometry that is an ordered sequence of owned child geometries.
macro_rules! define_collection {
    (
        $(#[$attr:meta])*
        $struct_name:ident, $name:literal, $child:ty, $items:ident, $num_items:ident, $item_n:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $struct_name {
            cs: CoordinateSystem,
            $items: Vec<$child>,
        }

        impl $struct_name {
            pub const NAME: &'static str = $name;

            /// Create a new geometry from its children, which must share its dimensionality.
            pub fn new(cs: CoordinateSystem, $items: Vec<$child>) -> Result<Self> {
                let $items = adopt_children(&cs, $items)?;
                Ok(Self { cs, $items })
            }

            pub fn empty(cs: CoordinateSystem) -> Self {
                Self { cs, $items: vec![] }
            }

            pub fn coordinate_system(&self) -> CoordinateSystem {
                self.cs
            }

            pub fn is_empty(&self) -> bool {
                self.$items.is_empty()
            }

            pub fn $items(&self) -> &[$child] {
                &self.$items
            }

            pub fn $num_items(&self) -> usize {
                self.$items.len()
            }

            /// Returns the specified child, with 1-based indexing.
            pub fn $item_n(&self, n: usize) -> Option<&$child> {
                n.checked_sub(1).and_then(|i| self.$items.get(i))
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $child> {
                self.$items.iter()
            }

            pub fn with_srid(&self, srid: u32) -> Self {
                Self {
                    cs: self.cs.with_srid(srid),
                    $items: self.$items.iter().map(|g| g.with_srid(srid)).collect(),
                }
            }

            pub fn to_array(&self) -> NestedCoords {
                NestedCoords::Nested(self.$items.iter().map(|g| g.to_array()).collect())
            }
        }

        impl<'a> IntoIterator for &'a $struct_name {
            type Item = &'a $child;
            type IntoIter = std::slice::Iter<'a, $child>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

define_collection!(
    /// A collection of points.
    MultiPoint, "MultiPoint", Point, points, num_geometries, geometry_n
);

define_collection!(
    /// A collection of LineStrings.
    MultiLineString, "MultiLineString", LineString, line_strings, num_geometries, geometry_n
);

define_collection!(
    /// A collection of polygons.
    MultiPolygon, "MultiPolygon", Polygon, polygons, num_geometries, geometry_n
);

define_collection!(
    /// A heterogeneous collection of geometries.
    GeometryCollection, "GeometryCollection", Geometry, geometries, num_geometries, geometry_n
);

define_collection!(
    /// A contiguous collection of polygon patches sharing common boundary segments.
    PolyhedralSurface, "PolyhedralSurface", Polygon, patches, num_patches, patch_n
);

define_collection!(
    /// A triangulated irregular network: a polyhedral surface made only of triangles.
    Tin, "TIN", Triangle, patches, num_patches, patch_n
);

impl GeometryCollection {
    /// The largest topological dimension of the children, or 0 if empty.
    pub fn dimension(&self) -> usize {
        self.geometries
            .iter()
            .map(Geometry::dimension)
            .max()
            .unwrap_or(0)
    }
}
