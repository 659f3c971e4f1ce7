/*!
collide2d
=========

**collide2d** is a small 2D collision core for games: axis-aligned boxes,
convex polygons, point containment, pairwise overlap tests, and a
minimum-displacement vector for separating overlapping polygons.

The overlap tests on convex polygons are vertex-sampling heuristics inherited
from the engine this crate was extracted from; see [`shape::Convex`] for the
exact guarantees (and non-guarantees) they make.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
