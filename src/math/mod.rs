//! Aliases for the mathematical types used throughout this crate.

pub use self::coordinate::Coordinate;

mod coordinate;

use na::{Point2, Vector2};

/// The scalar type used throughout this crate.
pub use f32 as Real;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 2;

/// The point type.
pub type Point = Point2<Real>;

/// The vector type.
pub type Vector = Vector2<Real>;
