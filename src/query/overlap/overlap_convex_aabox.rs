use crate::shape::{AABox, Collidable, Convex};

/// Overlap test between a convex polygon and an axis-aligned box, by vertex sampling.
///
/// Reports a collision iff some world-space vertex of the polygon lies inside
/// the box, or some corner of the box lies inside the polygon. Same
/// limitation as [`crate::query::overlap_convex_convex`]: an overlap whose
/// boundary crossings involve no vertex of either shape goes undetected.
pub fn overlap_convex_aabox(poly: &Convex, aabox: &AABox) -> bool {
    for i in 0..poly.points().len() {
        if aabox.bounds.contains_point(&poly.world_point(i)) {
            return true;
        }
    }

    for corner in aabox.bounds.corners() {
        if poly.contains_point(&corner) {
            return true;
        }
    }

    false
}

/// Overlap test between an axis-aligned box and a convex polygon.
#[inline]
pub fn overlap_aabox_convex(aabox: &AABox, poly: &Convex) -> bool {
    overlap_convex_aabox(poly, aabox)
}
