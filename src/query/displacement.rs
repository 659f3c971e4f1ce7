use crate::math::{Real, Vector};
use crate::shape::Convex;
use crate::utils;

/// Computes the smallest vector that pushes the penetrating polygon `poly2`
/// out of `poly1`.
///
/// For every edge of `poly1`, the signed average distance from all vertices
/// of `poly2` to that edge segment is computed; the edge whose average has
/// the smallest absolute value is the separating edge. The result is that
/// edge's outward normal scaled by the winning signed average, so adding it
/// to `poly2`'s position moves its vertices out of `poly1` with the least
/// motion.
///
/// This favors the simplest separating edge over a geometrically exact
/// minimum penetration depth, which is plenty for per-tick push-out of
/// shallow overlaps. Degenerate polygons (fewer than 3 vertices) yield a NaN
/// vector.
pub fn displacement_convex_convex(poly1: &Convex, poly2: &Convex) -> Vector {
    let points = poly1.points();
    let mut displacement = Vector::zeros();
    let mut closest: Real = Real::MAX;
    let mut h = points.len().saturating_sub(1);

    for i in 0..points.len() {
        let a = poly1.world_point(i);
        let b = poly1.world_point(h);
        let avg =
            utils::signed_avg_distance_to_segment(&a, &b, poly2.points(), &poly2.translation());

        if avg.abs() < closest.abs() {
            // Edge vector rotated 90 degrees.
            displacement = Vector::new(-(a.y - b.y), a.x - b.x);
            closest = avg;
        }

        h = i;
    }

    displacement.normalize() * closest
}
