use crate::bounding_volume::Rect;
use crate::math::{Coordinate, Point};
use crate::query::{self, Unsupported};
use crate::shape::{Collidable, ShapeType};

/// An axis-aligned box shape.
///
/// The cheapest collidable: containment and box-box overlap are a handful of
/// comparisons. Also reused as-is for screen-space hit boxes (button clicks),
/// since its edges are inclusive.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AABox {
    /// The rectangle delimiting this box.
    pub bounds: Rect,
}

impl AABox {
    /// Creates a box from its bounding rectangle.
    #[inline]
    pub const fn new(bounds: Rect) -> Self {
        AABox { bounds }
    }
}

impl Collidable for AABox {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::AABox
    }

    #[inline]
    fn position(&self) -> Coordinate {
        self.bounds.location()
    }

    #[inline]
    fn set_position(&mut self, position: Coordinate) {
        self.bounds.set_location(position);
    }

    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        self.bounds.contains_point(pt)
    }

    #[inline]
    fn overlaps(&self, other: &dyn Collidable) -> Result<bool, Unsupported> {
        query::overlap_test(self, other)
    }

    #[inline]
    fn as_aabox(&self) -> Option<&AABox> {
        Some(self)
    }
}
