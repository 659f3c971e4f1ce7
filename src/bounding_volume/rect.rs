//! Axis-aligned rectangle with integer extents.

use crate::math::{Coordinate, Point, Real};

/// An axis-aligned bounding rectangle in pixel space.
///
/// Defined by its top-left corner and its extents, with y growing downward
/// (screen convention). Both the containment and the intersection tests are
/// inclusive: a point on an edge is inside, and two rectangles sharing an
/// edge intersect.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: i32,
    /// The y coordinate of the top edge.
    pub y: i32,
    /// The width of the rectangle.
    pub width: i32,
    /// The height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extents.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the left edge.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// The x coordinate of the right edge.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// The y coordinate of the top edge.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// The y coordinate of the bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner of this rectangle.
    #[inline]
    pub const fn location(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    /// Moves this rectangle so its top-left corner is `location`, without resizing it.
    #[inline]
    pub fn set_location(&mut self, location: Coordinate) {
        self.x = location.x;
        self.y = location.y;
    }

    /// Tests whether `pt` lies inside this rectangle, inclusive on all four edges.
    #[inline]
    pub fn contains_point(&self, pt: &Point) -> bool {
        pt.x >= self.left() as Real
            && pt.x <= self.right() as Real
            && pt.y >= self.top() as Real
            && pt.y <= self.bottom() as Real
    }

    /// Tests whether this rectangle and `other` share any area.
    ///
    /// Touching edges count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// The four corners of this rectangle, in floating point.
    ///
    /// Ordered top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        let (l, r) = (self.left() as Real, self.right() as Real);
        let (t, b) = (self.top() as Real, self.bottom() as Real);
        [
            Point::new(l, t),
            Point::new(r, t),
            Point::new(r, b),
            Point::new(l, b),
        ]
    }
}
