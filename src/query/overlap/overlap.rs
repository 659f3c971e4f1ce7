use crate::query::{
    overlap_aabox_aabox, overlap_aabox_convex, overlap_convex_aabox, overlap_convex_convex,
    Unsupported,
};
use crate::shape::Collidable;

/// Tests whether two shapes overlap.
///
/// Dispatches on the concrete kinds of `g1` and `g2`:
///
/// * box - box uses exact rectangle intersection (touching edges overlap);
/// * any pair involving a convex polygon uses the vertex-sampling heuristic
///   documented on [`crate::shape::Convex`];
/// * any unrecognized pair returns `Err(`[`Unsupported`]`)` naming both
///   kinds, never a silent `false`.
pub fn overlap_test(g1: &dyn Collidable, g2: &dyn Collidable) -> Result<bool, Unsupported> {
    if let (Some(b1), Some(b2)) = (g1.as_aabox(), g2.as_aabox()) {
        Ok(overlap_aabox_aabox(b1, b2))
    } else if let (Some(c1), Some(c2)) = (g1.as_convex(), g2.as_convex()) {
        Ok(overlap_convex_convex(c1, c2))
    } else if let (Some(c1), Some(b2)) = (g1.as_convex(), g2.as_aabox()) {
        Ok(overlap_convex_aabox(c1, b2))
    } else if let (Some(b1), Some(c2)) = (g1.as_aabox(), g2.as_convex()) {
        Ok(overlap_aabox_convex(b1, c2))
    } else {
        let err = Unsupported {
            first: g1.shape_type(),
            second: g2.shape_type(),
        };
        log::debug!("{err}");
        Err(err)
    }
}
