use crate::shape::AABox;

/// Overlap test between two axis-aligned boxes.
///
/// Exact and symmetric; boxes sharing an edge count as overlapping.
#[inline]
pub fn overlap_aabox_aabox(box1: &AABox, box2: &AABox) -> bool {
    box1.bounds.intersects(&box2.bounds)
}
