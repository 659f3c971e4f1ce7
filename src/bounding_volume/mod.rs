//! Bounding volumes (only the axis-aligned rectangle, for now).

pub use self::rect::Rect;

mod rect;
