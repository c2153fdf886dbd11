use criterion::{criterion_group, criterion_main, Criterion};
use sfgeo::datatypes::CoordinateSystem;
use sfgeo::geometry::{Geometry, LineString, MultiPolygon, Point, Polygon};
use sfgeo::io::wkb::{decode, encode, WkbDialect};

/// A MultiPolygon of 100 polygons, each with an exterior ring of 101 points.
fn create_data() -> Geometry {
    let cs = CoordinateSystem::xy(4326);
    let polygons = (0..100)
        .map(|i| {
            let offset = i as f64 * 10.0;
            let mut points: Vec<Point> = (0..100)
                .map(|j| {
                    let angle = j as f64 * std::f64::consts::TAU / 100.0;
                    Point::xy(offset + angle.cos(), angle.sin())
                })
                .collect();
            points.push(points[0]);
            let ring = LineString::new(cs, points).unwrap();
            Polygon::new(cs, vec![ring]).unwrap()
        })
        .collect();
    MultiPolygon::new(cs, polygons).unwrap().into()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let geom = create_data();
    let wkb = encode(&geom, WkbDialect::Wkb).unwrap();
    let ewkb = encode(&geom, WkbDialect::Ewkb).unwrap();

    c.bench_function("decode WKB MultiPolygon", |b| {
        b.iter(|| {
            let _geom = decode(&wkb, WkbDialect::Wkb, 4326).unwrap();
        })
    });
    c.bench_function("decode EWKB MultiPolygon", |b| {
        b.iter(|| {
            let _geom = decode(&ewkb, WkbDialect::Ewkb, 0).unwrap();
        })
    });
    c.bench_function("encode EWKB MultiPolygon", |b| {
        b.iter(|| {
            let _bytes = encode(&geom, WkbDialect::Ewkb).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
