use std::fmt::{self, Display, Formatter, Write};

use itertools::Itertools;

use crate::datatypes::CoordinateSystem;
use crate::geometry::{CompoundCurve, CompoundCurveSegment, Curve, Geometry, LineString, Point};

impl Display for Geometry {
    /// Writes ISO WKT, e.g. `POINT Z (1 2 3)` or `LINESTRING EMPTY`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tagged(f, self)
    }
}

impl Geometry {
    /// The WKT representation of this geometry. The SRID is not part of the output.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    /// The EWKT representation of this geometry, prefixed with `SRID=n;` if the SRID is not 0.
    pub fn as_ewkt(&self) -> String {
        match self.srid() {
            0 => self.to_string(),
            srid => format!("SRID={};{}", srid, self),
        }
    }
}

fn dimension_tag(cs: &CoordinateSystem) -> &'static str {
    match (cs.has_z(), cs.has_m()) {
        (false, false) => "",
        (true, false) => " Z",
        (false, true) => " M",
        (true, true) => " ZM",
    }
}

fn write_tagged(f: &mut Formatter<'_>, geom: &Geometry) -> fmt::Result {
    write!(
        f,
        "{}{} ",
        geom.geometry_type().to_uppercase(),
        dimension_tag(&geom.coordinate_system())
    )?;

    match geom {
        Geometry::Point(g) => write_point(f, g),
        Geometry::LineString(g) => write_points(f, g.points()),
        Geometry::CircularString(g) => write_points(f, g.points()),
        Geometry::CompoundCurve(g) => write_compound_curve(f, g),
        Geometry::Polygon(g) => write_rings(f, g.rings()),
        Geometry::Triangle(g) => write_rings(f, g.rings()),
        Geometry::CurvePolygon(g) => write_list(f, g.rings(), write_curve),
        Geometry::MultiPoint(g) => write_list(f, g.points(), write_point),
        Geometry::MultiLineString(g) => {
            write_list(f, g.line_strings(), |f, ls| write_points(f, ls.points()))
        }
        Geometry::MultiPolygon(g) => write_list(f, g.polygons(), |f, p| write_rings(f, p.rings())),
        Geometry::GeometryCollection(g) => write_list(f, g.geometries(), write_tagged),
        Geometry::PolyhedralSurface(g) => {
            write_list(f, g.patches(), |f, p| write_rings(f, p.rings()))
        }
        Geometry::Tin(g) => write_list(f, g.patches(), |f, t| write_rings(f, t.rings())),
    }
}

/// Write `EMPTY`, or the parenthesized, comma-separated items.
fn write_list<T>(
    f: &mut Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    if items.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_char(')')
}

fn write_coords(f: &mut Formatter<'_>, point: &Point) -> fmt::Result {
    write!(f, "{}", point.coords().iter().format(" "))
}

fn write_point(f: &mut Formatter<'_>, point: &Point) -> fmt::Result {
    if point.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_char('(')?;
    write_coords(f, point)?;
    f.write_char(')')
}

fn write_points(f: &mut Formatter<'_>, points: &[Point]) -> fmt::Result {
    write_list(f, points, write_coords)
}

fn write_rings(f: &mut Formatter<'_>, rings: &[LineString]) -> fmt::Result {
    write_list(f, rings, |f, ring| write_points(f, ring.points()))
}

fn write_compound_curve(f: &mut Formatter<'_>, curve: &CompoundCurve) -> fmt::Result {
    write_list(f, curve.segments(), |f, segment| match segment {
        CompoundCurveSegment::LineString(ls) => write_points(f, ls.points()),
        CompoundCurveSegment::CircularString(cs) => {
            f.write_str("CIRCULARSTRING ")?;
            write_points(f, cs.points())
        }
    })
}

/// Linear rings are untagged; any other ring carries its kind.
fn write_curve(f: &mut Formatter<'_>, curve: &Curve) -> fmt::Result {
    match curve {
        Curve::LineString(ls) => write_points(f, ls.points()),
        Curve::CircularString(cs) => {
            f.write_str("CIRCULARSTRING ")?;
            write_points(f, cs.points())
        }
        Curve::CompoundCurve(cc) => {
            f.write_str("COMPOUNDCURVE ")?;
            write_compound_curve(f, cc)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{GeometryCollection, MultiPoint, Polygon, PolyhedralSurface, Tin};
    use crate::test::curve::{arc0, cc0, curve_polygon0};
    use crate::test::linestring::{ls0, ls_xyz};
    use crate::test::point::{p0, p_zm};
    use crate::test::polygon::{p1, triangle0};

    #[test]
    fn points() {
        assert_eq!(Geometry::from(Point::xy(1., 2.)).to_string(), "POINT (1 2)");
        assert_eq!(
            Geometry::from(Point::xym(1., 2.5, -3.)).to_string(),
            "POINT M (1 2.5 -3)"
        );
        assert_eq!(Geometry::from(p_zm()).to_string(), "POINT ZM (1 2 3 4)");
        assert_eq!(
            Geometry::from(Point::empty(CoordinateSystem::xyz(0))).to_string(),
            "POINT Z EMPTY"
        );
    }

    #[test]
    fn linear() {
        assert_eq!(Geometry::from(ls0()).to_string(), "LINESTRING (0 0, 1 1)");
        assert_eq!(
            Geometry::from(ls_xyz()).to_string(),
            "LINESTRING Z (0 0 1, 1 1 2)"
        );
        assert_eq!(
            Geometry::from(p1()).to_string(),
            "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0), (0.25 0.25, 0.75 0.25, 0.75 0.75, 0.25 0.25))"
        );
        assert_eq!(
            Geometry::from(triangle0()).to_string(),
            "TRIANGLE ((0 0, 1 0, 0 1, 0 0))"
        );
        assert_eq!(
            Geometry::from(Polygon::empty(CoordinateSystem::xy(0))).to_string(),
            "POLYGON EMPTY"
        );
    }

    #[test]
    fn curves() {
        assert_eq!(
            Geometry::from(arc0()).to_string(),
            "CIRCULARSTRING (1 1, 2 0, 3 1)"
        );
        assert_eq!(
            Geometry::from(cc0()).to_string(),
            "COMPOUNDCURVE ((0 0, 1 1), CIRCULARSTRING (1 1, 2 0, 3 1))"
        );
        assert_eq!(
            Geometry::from(curve_polygon0()).to_string(),
            "CURVEPOLYGON (COMPOUNDCURVE ((0 0, 1 1), CIRCULARSTRING (1 1, 2 0, 3 1), (3 1, 0 0)), \
             (1 0.5, 1.5 0.5, 1.5 0.7, 1 0.5))"
        );
    }

    #[test]
    fn collections() {
        let cs = CoordinateSystem::xy(0);
        let mp = MultiPoint::new(cs, vec![p0(), Point::empty(cs)]).unwrap();
        assert_eq!(
            Geometry::from(mp).to_string(),
            "MULTIPOINT ((0 1), EMPTY)"
        );

        let gc = GeometryCollection::new(
            cs,
            vec![p0().into(), ls0().into(), GeometryCollection::empty(cs).into()],
        )
        .unwrap();
        assert_eq!(
            Geometry::from(gc).to_string(),
            "GEOMETRYCOLLECTION (POINT (0 1), LINESTRING (0 0, 1 1), GEOMETRYCOLLECTION EMPTY)"
        );

        let tin = Tin::new(cs, vec![triangle0()]).unwrap();
        assert_eq!(
            Geometry::from(tin).to_string(),
            "TIN (((0 0, 1 0, 0 1, 0 0)))"
        );
        assert_eq!(
            Geometry::from(PolyhedralSurface::empty(cs)).to_string(),
            "POLYHEDRALSURFACE EMPTY"
        );
    }

    #[test]
    fn ewkt() {
        let geom = Geometry::from(p0().with_srid(4326));
        assert_eq!(geom.as_text(), "POINT (0 1)");
        assert_eq!(geom.as_ewkt(), "SRID=4326;POINT (0 1)");
        assert_eq!(Geometry::from(p0()).as_ewkt(), "POINT (0 1)");
    }
}
