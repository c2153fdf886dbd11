use crate::datatypes::CoordinateSystem;
use crate::geometry::{LineString, Point};

fn line_string(coords: &[(f64, f64)]) -> LineString {
    let points = coords.iter().map(|(x, y)| Point::xy(*x, *y)).collect();
    LineString::new(CoordinateSystem::xy(0), points).unwrap()
}

pub(crate) fn ls0() -> LineString {
    line_string(&[(0., 0.), (1., 1.)])
}

/// A closed unit square.
pub(crate) fn ring0() -> LineString {
    line_string(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)])
}

/// A hole inside [`ring0`].
pub(crate) fn ring1() -> LineString {
    line_string(&[(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.25)])
}

pub(crate) fn ls_xyz() -> LineString {
    LineString::new(
        CoordinateSystem::xyz(0),
        vec![Point::xyz(0., 0., 1.), Point::xyz(1., 1., 2.)],
    )
    .unwrap()
}
