//! Cutting planes and projection axes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Edges whose direction is this close to perpendicular with the plane
/// normal are treated as parallel and contribute no intersection.
pub const PLANE_PARALLEL_EPSILON: f64 = 1e-6;

/// An infinite plane defined by a point and a normal vector.
///
/// The normal does not need to be unit length.
///
/// # Example
///
/// ```
/// use model3d_types::{Plane, Point3, Vector3};
///
/// let plane = Plane::new(Point3::new(0.0, 0.0, 0.5), Vector3::z()).unwrap();
/// let hit = plane
///     .intersect_segment(&Point3::new(0.0, 0.0, 0.0), &Point3::new(0.0, 0.0, 1.0))
///     .unwrap();
/// assert!((hit.z - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    point: Point3<f64>,
    normal: Vector3<f64>,
}

impl Plane {
    /// Create a plane from a point and a normal vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`] if the normal has zero
    /// magnitude.
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Result<Self, GeometryError> {
        if normal.norm() == 0.0 {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(Self { point, normal })
    }

    /// A point on the plane.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Point3<f64> {
        self.point
    }

    /// The plane normal (not necessarily unit length).
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Intersect a segment with the plane using the parametric line method.
    ///
    /// Returns the intersection point only when the segment actually crosses
    /// the plane (`0 <= fac <= 1`); intersections on the segment's infinite
    /// extension are discarded. Segments parallel to the plane within
    /// [`PLANE_PARALLEL_EPSILON`] contribute nothing, including segments
    /// lying entirely in the plane.
    #[must_use]
    pub fn intersect_segment(
        &self,
        start: &Point3<f64>,
        end: &Point3<f64>,
    ) -> Option<Point3<f64>> {
        let u = end - start;
        let dot = self.normal.dot(&u);
        if dot.abs() <= PLANE_PARALLEL_EPSILON {
            return None;
        }

        let w = start - self.point;
        let fac = -self.normal.dot(&w) / dot;
        if (0.0..=1.0).contains(&fac) {
            Some(start + u * fac)
        } else {
            None
        }
    }
}

/// A reference line used to express plane-slice output in 2D.
///
/// Plane slicing measures each 3D intersection point's perpendicular
/// distance to two caller-supplied axes, yielding unsigned local (x, y)
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Axis {
    origin: Point3<f64>,
    direction: Vector3<f64>,
}

impl Axis {
    /// Create an axis from an origin and a direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`] if the direction has zero
    /// magnitude.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Result<Self, GeometryError> {
        if direction.norm() == 0.0 {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(Self { origin, direction })
    }

    /// Perpendicular distance from a point to this axis line.
    #[must_use]
    pub fn distance(&self, point: &Point3<f64>) -> f64 {
        let offset = point - self.origin;
        offset.cross(&self.direction).norm() / self.direction.norm()
    }
}
