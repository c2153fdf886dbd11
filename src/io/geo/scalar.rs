use crate::datatypes::CoordinateSystem;
use crate::error::{GeoError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Triangle,
};

fn incorrect_type(geom: &Geometry) -> GeoError {
    GeoError::IncorrectType(format!("{} cannot be converted to geo", geom.geometry_type()).into())
}

/// Convert a non-empty XY [`Point`] to a [`geo::Point`].
pub fn point_to_geo(point: &Point) -> Result<geo::Point<f64>> {
    match (point.x(), point.y()) {
        (Some(x), Some(y)) => Ok(geo::Point::new(x, y)),
        _ => Err(GeoError::IncorrectType("empty point".into())),
    }
}

/// Convert a [`LineString`] to a [`geo::LineString`].
pub fn line_string_to_geo(line_string: &LineString) -> Result<geo::LineString<f64>> {
    line_string
        .points()
        .iter()
        .map(|point| point_to_geo(point).map(geo::Coord::from))
        .collect::<Result<Vec<_>>>()
        .map(geo::LineString::new)
}

/// Convert a [`Polygon`] to a [`geo::Polygon`]. An empty polygon has an empty exterior ring.
pub fn polygon_to_geo(polygon: &Polygon) -> Result<geo::Polygon<f64>> {
    let exterior = match polygon.exterior_ring() {
        Some(ring) => line_string_to_geo(ring)?,
        None => geo::LineString::new(vec![]),
    };
    let interiors = polygon
        .interior_rings()
        .iter()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::Polygon::new(exterior, interiors))
}

fn triangle_to_geo(triangle: &Triangle) -> Result<geo::Triangle<f64>> {
    let points = match triangle.exterior_ring() {
        Some(ring) => ring.points(),
        None => return Err(GeoError::IncorrectType("empty triangle".into())),
    };
    Ok(geo::Triangle::new(
        point_to_geo(&points[0])?.into(),
        point_to_geo(&points[1])?.into(),
        point_to_geo(&points[2])?.into(),
    ))
}

impl TryFrom<&Geometry> for geo::Geometry<f64> {
    type Error = GeoError;

    fn try_from(geom: &Geometry) -> Result<Self> {
        let cs = geom.coordinate_system();
        if cs.has_z() || cs.has_m() {
            return Err(GeoError::IncorrectType(
                format!("{} geometries cannot be converted to geo", cs.dimension()).into(),
            ));
        }

        let out = match geom {
            Geometry::Point(g) => point_to_geo(g)?.into(),
            Geometry::LineString(g) => line_string_to_geo(g)?.into(),
            Geometry::Polygon(g) => polygon_to_geo(g)?.into(),
            Geometry::Triangle(g) => triangle_to_geo(g)?.into(),
            Geometry::MultiPoint(g) => geo::MultiPoint::new(
                g.iter().map(point_to_geo).collect::<Result<Vec<_>>>()?,
            )
            .into(),
            Geometry::MultiLineString(g) => geo::MultiLineString::new(
                g.iter()
                    .map(line_string_to_geo)
                    .collect::<Result<Vec<_>>>()?,
            )
            .into(),
            Geometry::MultiPolygon(g) => geo::MultiPolygon::new(
                g.iter().map(polygon_to_geo).collect::<Result<Vec<_>>>()?,
            )
            .into(),
            Geometry::GeometryCollection(g) => {
                geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(
                    g.iter()
                        .map(geo::Geometry::<f64>::try_from)
                        .collect::<Result<Vec<_>>>()?,
                ))
            }
            Geometry::CircularString(_)
            | Geometry::CompoundCurve(_)
            | Geometry::CurvePolygon(_)
            | Geometry::PolyhedralSurface(_)
            | Geometry::Tin(_) => return Err(incorrect_type(geom)),
        };
        Ok(out)
    }
}

fn point_from_geo(point: &geo::Point<f64>) -> Point {
    Point::xy(point.x(), point.y())
}

fn line_string_from_geo(line_string: &geo::LineString<f64>) -> Result<LineString> {
    let points = line_string
        .coords()
        .map(|coord| Point::xy(coord.x, coord.y))
        .collect();
    LineString::new(CoordinateSystem::xy(0), points)
}

fn polygon_from_geo(polygon: &geo::Polygon<f64>) -> Result<Polygon> {
    let cs = CoordinateSystem::xy(0);
    if polygon.exterior().0.is_empty() {
        if !polygon.interiors().is_empty() {
            return Err(GeoError::invalid(
                "a Polygon with interior rings must have an exterior ring",
            ));
        }
        return Ok(Polygon::empty(cs));
    }
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(line_string_from_geo)
        .collect::<Result<Vec<_>>>()?;
    Polygon::new(cs, rings)
}

impl TryFrom<&geo::Geometry<f64>> for Geometry {
    type Error = GeoError;

    /// Fails if the `geo` geometry breaks a structural rule, such as a one-point LineString.
    fn try_from(geom: &geo::Geometry<f64>) -> Result<Self> {
        let cs = CoordinateSystem::xy(0);
        let out = match geom {
            geo::Geometry::Point(g) => point_from_geo(g).into(),
            geo::Geometry::Line(g) => {
                let points = vec![point_from_geo(&g.start_point()), point_from_geo(&g.end_point())];
                LineString::new(cs, points)?.into()
            }
            geo::Geometry::LineString(g) => line_string_from_geo(g)?.into(),
            geo::Geometry::Polygon(g) => polygon_from_geo(g)?.into(),
            geo::Geometry::Rect(g) => polygon_from_geo(&g.to_polygon())?.into(),
            geo::Geometry::Triangle(g) => {
                let ring = LineString::new(
                    cs,
                    g.to_array()
                        .into_iter()
                        .chain(std::iter::once(g.v1()))
                        .map(|coord| Point::xy(coord.x, coord.y))
                        .collect(),
                )?;
                Triangle::new(cs, vec![ring])?.into()
            }
            geo::Geometry::MultiPoint(g) => {
                MultiPoint::new(cs, g.iter().map(point_from_geo).collect())?.into()
            }
            geo::Geometry::MultiLineString(g) => MultiLineString::new(
                cs,
                g.iter()
                    .map(line_string_from_geo)
                    .collect::<Result<Vec<_>>>()?,
            )?
            .into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::new(
                cs,
                g.iter().map(polygon_from_geo).collect::<Result<Vec<_>>>()?,
            )?
            .into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::new(
                cs,
                g.iter().map(Geometry::try_from).collect::<Result<Vec<_>>>()?,
            )?
            .into(),
        };
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use geo::{line_string, point, polygon};

    use super::*;
    use crate::test::curve::cc0;
    use crate::test::linestring::{ls0, ls_xyz};
    use crate::test::point::p0;
    use crate::test::polygon::{p1, triangle0};

    #[test]
    fn to_geo() {
        let geom = geo::Geometry::<f64>::try_from(&Geometry::from(p0())).unwrap();
        assert_eq!(geom, geo::Geometry::from(point!(x: 0., y: 1.)));

        let geom = geo::Geometry::<f64>::try_from(&Geometry::from(ls0())).unwrap();
        assert_eq!(geom, geo::Geometry::from(line_string![(x: 0., y: 0.), (x: 1., y: 1.)]));

        let geom = geo::Geometry::<f64>::try_from(&Geometry::from(p1())).unwrap();
        let geo::Geometry::Polygon(polygon) = geom else {
            panic!("expected a Polygon");
        };
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.interiors().len(), 1);

        let geom = geo::Geometry::<f64>::try_from(&Geometry::from(triangle0())).unwrap();
        assert!(matches!(geom, geo::Geometry::Triangle(_)));
    }

    #[test]
    fn collection_to_geo() {
        let cs = CoordinateSystem::xy(0);
        let gc = GeometryCollection::new(cs, vec![p0().into(), ls0().into()]).unwrap();
        let geom = geo::Geometry::<f64>::try_from(&Geometry::from(gc)).unwrap();
        let geo::Geometry::GeometryCollection(gc) = geom else {
            panic!("expected a GeometryCollection");
        };
        assert_eq!(gc.len(), 2);
    }

    #[test]
    fn unsupported_to_geo() {
        let err = geo::Geometry::<f64>::try_from(&Geometry::from(cc0())).unwrap_err();
        assert!(matches!(err, GeoError::IncorrectType(_)));

        let err = geo::Geometry::<f64>::try_from(&Geometry::from(ls_xyz())).unwrap_err();
        assert!(matches!(err, GeoError::IncorrectType(_)));

        let empty = Geometry::from(Point::empty(CoordinateSystem::xy(0)));
        let err = geo::Geometry::<f64>::try_from(&empty).unwrap_err();
        assert!(matches!(err, GeoError::IncorrectType(_)));
    }

    #[test]
    fn from_geo() {
        let input: geo::Geometry<f64> = polygon![
            (x: 0., y: 0.),
            (x: 1., y: 0.),
            (x: 1., y: 1.),
            (x: 0., y: 1.),
        ]
        .into();
        let geom = Geometry::try_from(&input).unwrap();
        let Geometry::Polygon(polygon) = &geom else {
            panic!("expected a Polygon");
        };
        // geo closes rings on construction
        assert_eq!(polygon.exterior_ring().unwrap().num_points(), 5);
        assert_eq!(geom.srid(), 0);
        assert_eq!(geo::Geometry::<f64>::try_from(&geom).unwrap(), input);
    }

    #[test]
    fn from_geo_rect_and_line() {
        let rect: geo::Geometry<f64> = geo::Rect::new((0., 0.), (1., 1.)).into();
        assert_eq!(Geometry::try_from(&rect).unwrap().geometry_type(), "Polygon");

        let line: geo::Geometry<f64> = geo::Line::new((0., 0.), (1., 1.)).into();
        assert_eq!(Geometry::try_from(&line).unwrap(), Geometry::from(ls0()));
    }

    #[test]
    fn from_geo_triangle() {
        let input: geo::Geometry<f64> =
            geo::Triangle::new((0., 0.).into(), (1., 0.).into(), (0., 1.).into()).into();
        let geom = Geometry::try_from(&input).unwrap();
        assert_eq!(geom, Geometry::from(triangle0()));
    }

    #[test]
    fn collection_through_geo() {
        let cs = CoordinateSystem::xy(0);
        let gc = Geometry::from(
            GeometryCollection::new(cs, vec![p0().into(), ls0().into(), p1().into()]).unwrap(),
        );
        let converted = geo::Geometry::<f64>::try_from(&gc).unwrap();
        assert_eq!(Geometry::try_from(&converted).unwrap(), gc);

        let input = geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(vec![
            point!(x: 0., y: 1.).into(),
        ]));
        let geom = Geometry::try_from(&input).unwrap();
        assert_eq!(geom.geometry_type(), "GeometryCollection");
    }

    #[test]
    fn from_invalid_geo() {
        let input: geo::Geometry<f64> = line_string![(x: 0., y: 0.)].into();
        let err = Geometry::try_from(&input).unwrap_err();
        assert!(matches!(err, GeoError::StructuralInvariantViolation(_)));
    }

    #[test]
    fn from_geo_holes_without_exterior() {
        let hole = line_string![
            (x: 0.25, y: 0.25),
            (x: 0.75, y: 0.25),
            (x: 0.75, y: 0.75),
            (x: 0.25, y: 0.25),
        ];
        let input: geo::Geometry<f64> =
            geo::Polygon::new(geo::LineString::new(vec![]), vec![hole]).into();
        let err = Geometry::try_from(&input).unwrap_err();
        assert!(matches!(err, GeoError::StructuralInvariantViolation(_)));

        let empty: geo::Geometry<f64> =
            geo::Polygon::new(geo::LineString::new(vec![]), vec![]).into();
        assert!(Geometry::try_from(&empty).unwrap().is_empty());
    }
}
