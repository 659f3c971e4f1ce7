use crate::shape::ShapeType;
use thiserror::Error;

/// Error indicating that an overlap test is not supported between two shape kinds.
///
/// Overlap is implemented pairwise per concrete shape kind; asking for a pair
/// the dispatch does not recognize is always a programmer error (a new shape
/// kind was added without updating the dispatch), so it surfaces as an error
/// naming both kinds rather than silently reporting no collision. Call sites
/// where the shape kinds are known to be exhaustive may simply unwrap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("the collision test {first} - {second} has not been implemented")]
pub struct Unsupported {
    /// The kind of the first shape of the offending pair.
    pub first: ShapeType,
    /// The kind of the second shape of the offending pair.
    pub second: ShapeType,
}
