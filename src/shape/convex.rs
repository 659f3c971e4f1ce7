use crate::bounding_volume::Rect;
use crate::math::{Coordinate, Point, Real, Vector};
use crate::query::{self, Unsupported};
use crate::shape::{Collidable, ShapeType};
use crate::utils;

/// An arbitrary convex polygon shape.
///
/// The polygon is stored as a list of vertices in local space, shifted at
/// construction so the minimum x/y of the vertex set sits at the origin, plus
/// a world-space translation. This makes the translation directly usable both
/// for drawing and for every overlap query.
///
/// # Overlap guarantees
///
/// The default polygon-polygon and polygon-box overlap tests are
/// vertex-sampling heuristics: they report a collision iff some vertex of one
/// shape lies inside the other. Two convex polygons can overlap with no
/// vertex of either inside the other (a thin needle piercing straight through
/// a larger polygon) and the heuristic will report no collision. This is a
/// deliberate trade-off kept for compatibility with the engine this crate was
/// extracted from; [`crate::query::overlap_convex_convex_exact`] is the
/// separating-axis alternative for callers that need the exact answer.
///
/// # Degenerate input
///
/// Polygons with fewer than 3 vertices, or with zero-area bounds, are not
/// rejected; the overlap and displacement routines return meaningless results
/// for them. Callers are responsible for supplying a real convex polygon with
/// at least 3 vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Convex {
    points: Vec<Point>,
    position: Vector,
    bounds: Rect,
}

impl Convex {
    /// Creates a convex polygon from a vertex list.
    ///
    /// The vertices may be given in world or shape-local coordinates: the
    /// minimum x/y of the set, truncated to integer pixels, becomes the
    /// polygon's world anchor and every vertex is rebased relative to it.
    /// Vertex order (clockwise or counter-clockwise) does not matter;
    /// convexity is not checked.
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_offset(points, Coordinate::ZERO)
    }

    /// Creates a convex polygon from a vertex list, then shifts its anchor by `offset`.
    pub fn with_offset(mut points: Vec<Point>, offset: Coordinate) -> Self {
        let mut mins = Point::new(Real::MAX, Real::MAX);
        let mut maxs = Point::new(-Real::MAX, -Real::MAX);

        for pt in &points {
            mins.x = mins.x.min(pt.x);
            mins.y = mins.y.min(pt.y);
            maxs.x = maxs.x.max(pt.x);
            maxs.y = maxs.y.max(pt.y);
        }

        // Rebase every vertex on the truncated minimum corner.
        let anchor = Coordinate::from_point(&mins);
        let shift = anchor.to_vector();
        for pt in &mut points {
            *pt -= shift;
        }

        // Cached for coarse AABB queries; never recomputed.
        let bounds = Rect::new(
            0,
            0,
            (maxs.x - mins.x).ceil() as i32,
            (maxs.y - mins.y).ceil() as i32,
        );

        Convex {
            points,
            position: (anchor + offset).to_vector(),
            bounds,
        }
    }

    /// The vertices of this polygon, relative to its anchor.
    ///
    /// The minimum x/y over these vertices is at the origin (up to the
    /// truncation performed at construction for fractional input).
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The world-space translation applied to every local vertex.
    #[inline]
    pub fn translation(&self) -> Vector {
        self.position
    }

    /// Sets the world-space translation of this polygon.
    #[inline]
    pub fn set_translation(&mut self, translation: Vector) {
        self.position = translation;
    }

    /// The `i`-th vertex of this polygon, in world space.
    #[inline]
    pub fn world_point(&self, i: usize) -> Point {
        self.points[i] + self.position
    }

    /// The axis-aligned box of the local vertices, cached at construction.
    ///
    /// Anchored at the origin; add [`Self::translation`] to place it in world
    /// space. Only a coarse bound: it is not kept in sync with the anchor.
    #[inline]
    pub fn local_bounds(&self) -> Rect {
        self.bounds
    }

    /// Computes the smallest vector that pushes the penetrating polygon
    /// `other` out of this polygon, based on its nearest edge.
    ///
    /// See [`crate::query::displacement_convex_convex`] for the exact
    /// semantics. Callers add the result to `other`'s position to resolve the
    /// collision.
    #[inline]
    pub fn find_displacement(&self, other: &Convex) -> Vector {
        query::displacement_convex_convex(self, other)
    }
}

impl Collidable for Convex {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Convex
    }

    #[inline]
    fn position(&self) -> Coordinate {
        Coordinate::from_vector(&self.position)
    }

    #[inline]
    fn set_position(&mut self, position: Coordinate) {
        self.position = position.to_vector();
    }

    /// Tests containment with the even-odd rule.
    ///
    /// A point exactly on an edge may be classified either way depending on
    /// floating-point rounding of the edge intercept.
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        utils::point_in_poly_even_odd(pt, &self.points, &self.position)
    }

    #[inline]
    fn overlaps(&self, other: &dyn Collidable) -> Result<bool, Unsupported> {
        query::overlap_test(self, other)
    }

    #[inline]
    fn as_convex(&self) -> Option<&Convex> {
        Some(self)
    }
}
