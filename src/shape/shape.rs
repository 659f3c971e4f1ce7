use crate::math::{Coordinate, Point};
use crate::query::Unsupported;
use crate::shape::{AABox, Convex};
use core::fmt;

/// Enum representing the kind of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    /// An axis-aligned box shape.
    AABox,
    /// A convex polygon shape.
    Convex,
    /// A user-defined shape kind, never recognized by the built-in overlap dispatch.
    Custom,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::AABox => f.pad("AABox"),
            ShapeType::Convex => f.pad("Convex"),
            ShapeType::Custom => f.pad("Custom"),
        }
    }
}

/// Trait implemented by every shape the collision core can test.
///
/// A collidable has a world-space anchor position in pixel coordinates, can
/// test containment of a single point, and can test overlap against another
/// collidable. Overlap is defined pairwise per concrete shape kind, so asking
/// for a pair the dispatch does not recognize returns [`Unsupported`] rather
/// than silently reporting no collision.
pub trait Collidable {
    /// The kind of this shape, used for overlap dispatch and error reporting.
    fn shape_type(&self) -> ShapeType;

    /// The world-space anchor of this shape.
    fn position(&self) -> Coordinate;

    /// Moves this shape so its anchor is `position`. Never changes its extents.
    fn set_position(&mut self, position: Coordinate);

    /// Tests whether `pt` (in world space) lies inside this shape.
    fn contains_point(&self, pt: &Point) -> bool;

    /// Tests whether this shape and `other` overlap.
    ///
    /// Returns `Err(Unsupported)` when no overlap test exists for the pair of
    /// concrete shape kinds; see [`crate::query::overlap_test`].
    fn overlaps(&self, other: &dyn Collidable) -> Result<bool, Unsupported>;

    /// Converts this shape to an [`AABox`], if it is one.
    #[inline]
    fn as_aabox(&self) -> Option<&AABox> {
        None
    }

    /// Converts this shape to a [`Convex`] polygon, if it is one.
    #[inline]
    fn as_convex(&self) -> Option<&Convex> {
        None
    }
}
