use approx::assert_relative_eq;
use collide2d::math::{Point, Vector};
use collide2d::query;
use collide2d::shape::{Collidable, Convex};

fn big_square() -> Convex {
    Convex::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ])
}

#[test]
fn offender_near_the_left_edge_is_pushed_out_left() {
    let square = big_square();
    // A 1x2 polygon fully inside the square, hugging its left edge.
    let offender = Convex::new(vec![
        Point::new(1.0, 4.0),
        Point::new(2.0, 4.0),
        Point::new(2.0, 6.0),
        Point::new(1.0, 6.0),
    ]);
    assert!(square.overlaps(&offender).unwrap());

    let disp = square.find_displacement(&offender);

    // Perpendicular to the left edge, pointing out of the square, with the
    // average vertex distance (1 and 2 -> 1.5) as magnitude.
    assert_relative_eq!(disp, Vector::new(-1.5, 0.0), epsilon = 1.0e-5);
}

#[test]
fn displacement_magnitude_stays_within_the_offender_diagonal() {
    let square = big_square();
    let offender = Convex::new(vec![
        Point::new(6.0, 1.0),
        Point::new(9.0, 1.0),
        Point::new(9.0, 3.0),
        Point::new(6.0, 3.0),
    ]);

    let disp = square.find_displacement(&offender);
    let bounds = offender.local_bounds();
    let diagonal =
        ((bounds.width * bounds.width + bounds.height * bounds.height) as f32).sqrt();

    assert!(disp.norm() <= diagonal, "displacement {disp} is wild");
}

#[test]
fn offender_near_the_top_edge_is_pushed_out_up() {
    let square = big_square();
    let offender = Convex::new(vec![
        Point::new(4.0, 1.0),
        Point::new(6.0, 1.0),
        Point::new(6.0, 2.0),
        Point::new(4.0, 2.0),
    ]);

    let disp = square.find_displacement(&offender);

    assert_relative_eq!(disp, Vector::new(0.0, -1.5), epsilon = 1.0e-5);
}

#[test]
fn method_and_query_agree() {
    let square = big_square();
    let offender = Convex::new(vec![
        Point::new(1.0, 4.0),
        Point::new(2.0, 4.0),
        Point::new(2.0, 6.0),
        Point::new(1.0, 6.0),
    ]);

    assert_eq!(
        square.find_displacement(&offender),
        query::displacement_convex_convex(&square, &offender)
    );
}
