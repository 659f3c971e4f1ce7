//! Non-persistent geometric queries.
//!
//! The most general entry point is [`overlap_test`], which dispatches on the
//! concrete kinds of its two [`crate::shape::Collidable`] arguments. The
//! functions of the form `overlap_[shape1]_[shape2]` are the specific
//! versions for pairs of shapes known at compile time, slightly faster due to
//! the lack of dynamic dispatch. [`displacement_convex_convex`] computes the
//! push-out vector used to resolve a polygon-polygon overlap.

pub use self::displacement::displacement_convex_convex;
pub use self::error::Unsupported;
pub use self::overlap::{
    overlap_aabox_aabox, overlap_aabox_convex, overlap_convex_aabox, overlap_convex_convex,
    overlap_convex_convex_exact, overlap_test,
};

mod displacement;
mod error;
mod overlap;
