use crate::math::{Point, Vector};

/// Tests if the given point is inside a polygon using the even-odd rule.
///
/// The polygon vertices are given in local space and translated by `shift`
/// before testing. It is assumed to be closed, i.e., first and last vertex
/// are implicitly connected by an edge. The test counts how many polygon
/// edges a horizontal ray drawn from the point crosses: an odd count means
/// the point is inside. Exact for any simple polygon, O(n), no allocation.
///
/// A point exactly on an edge may be classified either way depending on
/// floating-point rounding of the edge intercept.
pub fn point_in_poly_even_odd(pt: &Point, poly: &[Point], shift: &Vector) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = poly.len() - 1;

    for i in 0..poly.len() {
        let a = poly[i] + shift;
        let b = poly[j] + shift;

        if ((a.y < pt.y && b.y >= pt.y) || (b.y < pt.y && a.y >= pt.y))
            && (a.x <= pt.x || b.x <= pt.x)
        {
            // X-intercept of the edge at the ray's height.
            if a.x + (pt.y - a.y) / (b.y - a.y) * (b.x - a.x) < pt.x {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}
