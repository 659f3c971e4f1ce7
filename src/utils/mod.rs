//! Misc. geometric utilities used by the shape queries.

pub use self::point_in_poly::point_in_poly_even_odd;
pub use self::segment_distance::signed_avg_distance_to_segment;

mod point_in_poly;
mod segment_distance;
