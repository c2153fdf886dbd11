use crate::datatypes::CoordinateSystem;
use crate::geometry::{CircularString, CompoundCurve, CurvePolygon, LineString, Point};

pub(crate) fn arc0() -> CircularString {
    CircularString::new(
        CoordinateSystem::xy(0),
        vec![Point::xy(1., 1.), Point::xy(2., 0.), Point::xy(3., 1.)],
    )
    .unwrap()
}

/// A LineString from (0 0) to (1 1) followed by [`arc0`].
pub(crate) fn cc0() -> CompoundCurve {
    let cs = CoordinateSystem::xy(0);
    let ls = LineString::new(cs, vec![Point::xy(0., 0.), Point::xy(1., 1.)]).unwrap();
    CompoundCurve::new(cs, vec![ls.into(), arc0().into()]).unwrap()
}

/// A CurvePolygon with a closed compound exterior ring and a linear hole.
pub(crate) fn curve_polygon0() -> CurvePolygon {
    let cs = CoordinateSystem::xy(0);
    let back = LineString::new(cs, vec![Point::xy(3., 1.), Point::xy(0., 0.)]).unwrap();
    let mut segments = cc0().segments().to_vec();
    segments.push(back.into());
    let exterior = CompoundCurve::new(cs, segments).unwrap();

    let hole = LineString::new(
        cs,
        vec![
            Point::xy(1., 0.5),
            Point::xy(1.5, 0.5),
            Point::xy(1.5, 0.7),
            Point::xy(1., 0.5),
        ],
    )
    .unwrap();
    CurvePolygon::new(cs, vec![exterior.into(), hole.into()]).unwrap()
}
