use collide2d::bounding_volume::Rect;
use collide2d::math::{Coordinate, Point, Vector};
use collide2d::shape::{Collidable, Convex};

#[test]
fn construction_rebases_vertices_on_the_minimum_corner() {
    let poly = Convex::new(vec![
        Point::new(5.0, 5.0),
        Point::new(15.0, 5.0),
        Point::new(15.0, 15.0),
        Point::new(5.0, 15.0),
    ]);

    assert_eq!(poly.position(), Coordinate::new(5, 5));
    assert_eq!(poly.translation(), Vector::new(5.0, 5.0));
    assert_eq!(
        poly.points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    );
}

#[test]
fn construction_caches_the_local_bounds() {
    let poly = Convex::new(vec![
        Point::new(5.0, 5.0),
        Point::new(15.0, 5.0),
        Point::new(15.0, 15.0),
        Point::new(5.0, 15.0),
    ]);
    assert_eq!(poly.local_bounds(), Rect::new(0, 0, 10, 10));

    // Fractional extents round up.
    let tri = Convex::new(vec![
        Point::new(0.0, 0.0),
        Point::new(4.5, 0.0),
        Point::new(2.0, 3.25),
    ]);
    assert_eq!(tri.local_bounds(), Rect::new(0, 0, 5, 4));
}

#[test]
fn offset_shifts_the_anchor() {
    let poly = Convex::with_offset(
        vec![
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(15.0, 15.0),
            Point::new(5.0, 15.0),
        ],
        Coordinate::new(100, -10),
    );
    assert_eq!(poly.position(), Coordinate::new(105, -5));
    // Local vertices are unaffected by the offset.
    assert_eq!(poly.points()[0], Point::new(0.0, 0.0));
}

#[test]
fn translation_moves_world_vertices() {
    let mut poly = Convex::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    poly.set_position(Coordinate::new(30, 40));
    assert_eq!(poly.world_point(2), Point::new(40.0, 50.0));
}

#[test]
fn world_vertices_are_already_normalized_input_unchanged() {
    // A polygon whose minimum corner is already the origin: normalization is
    // the identity and re-running it changes nothing.
    let first = Convex::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    let second = Convex::new(first.points().to_vec());
    assert_eq!(first.points(), second.points());
    assert_eq!(first.translation(), second.translation());
}
