use collide2d::bounding_volume::Rect;
use collide2d::math::{Coordinate, Point};
use collide2d::query;
use collide2d::shape::{AABox, Collidable, Convex};

fn big_square() -> Convex {
    Convex::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ])
}

#[test]
fn overlapping_polygons_with_contained_vertices() {
    let a = big_square();
    let b = Convex::with_offset(
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ],
        Coordinate::new(8, 8),
    );

    assert!(a.overlaps(&b).unwrap());
    assert!(b.overlaps(&a).unwrap());
}

#[test]
fn disjoint_polygons_do_not_overlap() {
    let a = big_square();
    let b = Convex::with_offset(
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ],
        Coordinate::new(50, 50),
    );

    assert!(!a.overlaps(&b).unwrap());
    assert!(!b.overlaps(&a).unwrap());
}

/// The vertex-sampling heuristic misses overlaps where no vertex of either
/// polygon lies inside the other. A thin needle piercing straight through a
/// larger polygon is the canonical case, and the expected answer is `false`
/// in both directions. This pins down the documented limitation; it is not a
/// bug to fix.
#[test]
fn needle_through_polygon_is_reported_as_no_overlap() {
    let square = big_square();
    let needle = Convex::new(vec![
        Point::new(-5.0, 4.0),
        Point::new(15.0, 4.0),
        Point::new(15.0, 6.0),
        Point::new(-5.0, 6.0),
    ]);

    assert!(!square.overlaps(&needle).unwrap());
    assert!(!needle.overlaps(&square).unwrap());

    // The separating-axis entry point does detect the overlap.
    assert!(query::overlap_convex_convex_exact(&square, &needle));
    assert!(query::overlap_convex_convex_exact(&needle, &square));
}

#[test]
fn exact_test_agrees_on_the_easy_cases() {
    let a = big_square();
    let near = Convex::with_offset(
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ],
        Coordinate::new(8, 8),
    );
    let far = Convex::with_offset(near.points().to_vec(), Coordinate::new(50, 50));

    assert!(query::overlap_convex_convex_exact(&a, &near));
    assert!(!query::overlap_convex_convex_exact(&a, &far));
}

#[test]
fn polygon_box_overlap_samples_both_vertex_sets() {
    let poly = big_square();

    // Box corner inside the polygon.
    let overlapping = AABox::new(Rect::new(8, 8, 10, 10));
    // Polygon vertex inside the box.
    let containing = AABox::new(Rect::new(-5, -5, 30, 30));
    let disjoint = AABox::new(Rect::new(40, 40, 5, 5));

    assert!(poly.overlaps(&overlapping).unwrap());
    assert!(overlapping.overlaps(&poly).unwrap());
    assert!(poly.overlaps(&containing).unwrap());
    assert!(containing.overlaps(&poly).unwrap());
    assert!(!poly.overlaps(&disjoint).unwrap());
    assert!(!disjoint.overlaps(&poly).unwrap());
}

/// Box-vs-polygon inherits the vertex-sampling limitation through forwarding:
/// a wide, short polygon crossing a tall, narrow box leaves no vertex of
/// either shape inside the other.
#[test]
fn needle_through_box_is_reported_as_no_overlap() {
    let tall_box = AABox::new(Rect::new(4, -20, 2, 40));
    let wide_poly = Convex::new(vec![
        Point::new(-20.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(30.0, 2.0),
        Point::new(-20.0, 2.0),
    ]);

    assert!(!wide_poly.overlaps(&tall_box).unwrap());
    assert!(!tall_box.overlaps(&wide_poly).unwrap());
}
