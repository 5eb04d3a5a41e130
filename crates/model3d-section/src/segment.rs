//! Cross-section segments.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D line segment from one cross-section triangle intersection.
///
/// Slice output is an unordered bag of segments; nothing chains them into
/// polylines, and no connectivity between segments is guaranteed. The
/// endpoint order within a segment follows the triangle's edge traversal
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment2 {
    /// First endpoint.
    pub a: Point2<f64>,
    /// Second endpoint.
    pub b: Point2<f64>,
}

impl Segment2 {
    /// Create a segment from two endpoints.
    #[inline]
    #[must_use]
    pub const fn new(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self { a, b }
    }

    /// Euclidean length of the segment.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn segment_length() {
        let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_relative_eq!(s.length(), 5.0);
    }
}
