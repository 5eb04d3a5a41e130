//! Spatial extents bookkeeping.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-axis minimum and maximum of the coordinates seen so far.
///
/// Undefined until the mesh's first triangle arrives, then monotonically
/// widened one vertex at a time.
///
/// # Example
///
/// ```
/// use model3d_types::{Extents, Point3};
///
/// let e = Extents::from_point(Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(e.min, e.max);
/// assert_eq!(e.centre(), Point3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extents {
    /// Smallest x, y, z seen.
    pub min: Point3<f64>,
    /// Largest x, y, z seen.
    pub max: Point3<f64>,
}

impl Extents {
    /// Seed extents from a single point (zero-size box).
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Midpoint of the bounding box per axis.
    #[inline]
    #[must_use]
    pub fn centre(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Extent of the box per axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Widen to include a vertex.
    ///
    /// Strict comparisons per axis: a coordinate below the minimum lowers
    /// it, otherwise one above the maximum raises it; an exact tie updates
    /// neither bound.
    pub(crate) fn widen(&mut self, vertex: &Point3<f64>) {
        if vertex.x < self.min.x {
            self.min.x = vertex.x;
        } else if vertex.x > self.max.x {
            self.max.x = vertex.x;
        }

        if vertex.y < self.min.y {
            self.min.y = vertex.y;
        } else if vertex.y > self.max.y {
            self.max.y = vertex.y;
        }

        if vertex.z < self.min.z {
            self.min.z = vertex.z;
        } else if vertex.z > self.max.z {
            self.max.z = vertex.z;
        }
    }
}
