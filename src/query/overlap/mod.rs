//! Implementation details of the `overlap_test` function.

pub use self::overlap::overlap_test;
pub use self::overlap_aabox_aabox::overlap_aabox_aabox;
pub use self::overlap_convex_aabox::{overlap_aabox_convex, overlap_convex_aabox};
pub use self::overlap_convex_convex::{overlap_convex_convex, overlap_convex_convex_exact};

mod overlap;
mod overlap_aabox_aabox;
mod overlap_convex_aabox;
mod overlap_convex_convex;
