//! Collidable shapes supported by collide2d.

pub use self::aabox::AABox;
pub use self::convex::Convex;
#[doc(inline)]
pub use self::shape::{Collidable, ShapeType};

mod aabox;
mod convex;
mod shape;
