use crate::math::{Point, Real, Vector};

/// Signed average distance from a set of translated points to the segment `[a, b]`.
///
/// Each point's distance is the distance to the nearest point of the segment:
/// the perpendicular distance to the supporting line when the point projects
/// inside the segment, the distance to the nearest endpoint otherwise. The
/// distance is signed by which side of the supporting line the point lies on
/// (positive on the side the segment direction's left-hand perpendicular
/// points away from), and the signed values are averaged.
///
/// Degenerate input (no points, or `a == b`) yields NaN.
pub fn signed_avg_distance_to_segment(
    a: &Point,
    b: &Point,
    points: &[Point],
    shift: &Vector,
) -> Real {
    let line = b - a;
    let length = line.norm();
    let mut sum = 0.0;

    for pt in points {
        let world = pt + shift;
        let dpt = world - a;
        // Projection parameter along the segment, in length units.
        let r = dpt.dot(&line) / length;

        let dist = if r < 0.0 {
            dpt.norm()
        } else if r > length {
            (world - b).norm()
        } else {
            let proj = a + line * (r / length);
            (world - proj).norm()
        };

        sum += dist.copysign(line.perp(&dpt));
    }

    sum / points.len() as Real
}
