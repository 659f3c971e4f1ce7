use crate::math::{Real, Vector};
use crate::shape::{Collidable, Convex};

/// Overlap test between two convex polygons, by vertex sampling.
///
/// Reports a collision iff some world-space vertex of one polygon lies inside
/// the other. This misses overlaps where no vertex of either polygon is
/// inside the other (a thin polygon piercing straight through a larger one)
/// and certain exactly-coincident alignments; see
/// [`overlap_convex_convex_exact`] for the exact test. The heuristic is kept
/// as the default for compatibility with the engine this crate was extracted
/// from.
pub fn overlap_convex_convex(poly1: &Convex, poly2: &Convex) -> bool {
    for i in 0..poly2.points().len() {
        if poly1.contains_point(&poly2.world_point(i)) {
            return true;
        }
    }

    for i in 0..poly1.points().len() {
        if poly2.contains_point(&poly1.world_point(i)) {
            return true;
        }
    }

    false
}

/// Exact overlap test between two convex polygons, by separating axes.
///
/// Projects both polygons onto the outward normal of every edge of each
/// polygon; the polygons are disjoint iff some axis separates the two
/// projection intervals. Touching shapes count as overlapping. Unlike
/// [`overlap_convex_convex`], this catches overlaps where no vertex of either
/// polygon is inside the other.
pub fn overlap_convex_convex_exact(poly1: &Convex, poly2: &Convex) -> bool {
    !(separated_by_edge_normals(poly1, poly2) || separated_by_edge_normals(poly2, poly1))
}

/// Tests whether some edge normal of `poly1` separates the two polygons.
fn separated_by_edge_normals(poly1: &Convex, poly2: &Convex) -> bool {
    let n = poly1.points().len();
    for i in 0..n {
        let a = poly1.world_point(i);
        let b = poly1.world_point((i + 1) % n);
        let edge = b - a;
        let axis = Vector::new(-edge.y, edge.x);

        let (min1, max1) = project(poly1, &axis);
        let (min2, max2) = project(poly2, &axis);

        if max1 < min2 || max2 < min1 {
            return true;
        }
    }
    false
}

fn project(poly: &Convex, axis: &Vector) -> (Real, Real) {
    let mut min = Real::MAX;
    let mut max = -Real::MAX;
    for i in 0..poly.points().len() {
        let proj = poly.world_point(i).coords.dot(axis);
        min = min.min(proj);
        max = max.max(proj);
    }
    (min, max)
}
