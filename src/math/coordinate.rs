use crate::math::{Point, Real, Vector};
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// An integer counterpart to [`Vector`], used for pixel-space positions.
///
/// All geometric math happens in floating point; `Coordinate` exists for the
/// places where positions are genuinely discrete (screen pixels, box anchors).
/// The int→float conversions are exact for any on-screen range; the
/// float→int constructors truncate toward zero, matching an explicit cast.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// The horizontal component, in pixels.
    pub x: i32,
    /// The vertical component, in pixels.
    pub y: i32,
}

impl Coordinate {
    /// The zero coordinate.
    pub const ZERO: Coordinate = Coordinate::new(0, 0);
    /// The coordinate with both components equal to one.
    pub const ONE: Coordinate = Coordinate::new(1, 1);
    /// One pixel up, in screen coordinates (y grows downward).
    pub const UP: Coordinate = Coordinate::new(0, -1);
    /// One pixel down, in screen coordinates.
    pub const DOWN: Coordinate = Coordinate::new(0, 1);
    /// One pixel to the left.
    pub const LEFT: Coordinate = Coordinate::new(-1, 0);
    /// One pixel to the right.
    pub const RIGHT: Coordinate = Coordinate::new(1, 0);

    /// Creates a coordinate from its two components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Creates a coordinate with both components set to `value`.
    #[inline]
    pub const fn splat(value: i32) -> Self {
        Coordinate { x: value, y: value }
    }

    /// Converts a floating-point vector by truncating each component toward zero.
    #[inline]
    pub fn from_vector(v: &Vector) -> Self {
        Coordinate::new(v.x as i32, v.y as i32)
    }

    /// Converts a floating-point point by truncating each component toward zero.
    #[inline]
    pub fn from_point(pt: &Point) -> Self {
        Coordinate::new(pt.x as i32, pt.y as i32)
    }

    /// This coordinate as a floating-point vector.
    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x as Real, self.y as Real)
    }

    /// This coordinate as a floating-point point.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x as Real, self.y as Real)
    }
}

impl From<Coordinate> for Vector {
    #[inline]
    fn from(c: Coordinate) -> Vector {
        c.to_vector()
    }
}

impl From<Coordinate> for Point {
    #[inline]
    fn from(c: Coordinate) -> Point {
        c.to_point()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<i32> for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn add(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x + rhs, self.y + rhs)
    }
}

impl AddAssign for Coordinate {
    #[inline]
    fn add_assign(&mut self, rhs: Coordinate) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<i32> for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn sub(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x - rhs, self.y - rhs)
    }
}

impl SubAssign for Coordinate {
    #[inline]
    fn sub_assign(&mut self, rhs: Coordinate) {
        *self = *self - rhs;
    }
}

impl Mul for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn mul(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn div(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<i32> for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn div(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x / rhs, self.y / rhs)
    }
}
