//! Undirected segments used as geometric predicate helpers.

use nalgebra::Point3;

use crate::point::PointExt;

/// An undirected segment between two points.
///
/// Edges exist only as predicate helpers during triangle validation; the
/// mesh does not retain them as topology.
///
/// # Example
///
/// ```
/// use model3d_types::{Edge, Point3};
///
/// let edge = Edge::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
/// assert!(edge.contains(&Point3::new(1.0, 0.0, 0.0)));
/// assert!(!edge.contains(&Point3::new(3.0, 0.0, 0.0))); // past the end
/// assert!(!edge.contains(&Point3::new(1.0, 0.5, 0.0))); // off the line
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// First endpoint.
    pub start: Point3<f64>,
    /// Second endpoint.
    pub end: Point3<f64>,
}

impl Edge {
    /// Create an edge between two points.
    #[inline]
    #[must_use]
    pub const fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Check whether a point lies on the segment.
    ///
    /// True iff the point's perpendicular offset from the segment's line is
    /// exactly zero (zero cross-product magnitude) and its projected
    /// parametric position lies in `[0, 1]`.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let along = self.end - self.start;
        let offset = point - self.start;
        if along.cross(&offset).norm() != 0.0 {
            return false;
        }
        let len_sq = along.norm_squared();
        if len_sq == 0.0 {
            return false;
        }
        let t = offset.dot(&along) / len_sq;
        (0.0..=1.0).contains(&t)
    }
}

impl PartialEq for Edge {
    /// Order-independent: two edges are equal if they join the same pair of
    /// endpoints, regardless of direction.
    fn eq(&self, other: &Self) -> bool {
        (self.start.coincident(&other.start) && self.end.coincident(&other.end))
            || (self.start.coincident(&other.end) && self.end.coincident(&other.start))
    }
}
