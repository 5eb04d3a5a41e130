//! Validated triangles and the two plane-intersection algorithms.

use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::GeometryError;
use crate::normal::Normal;
use crate::plane::Plane;
use crate::point::PointExt;

/// A triangle with three non-degenerate vertices and a normal.
///
/// Construction enforces the validity invariant: no two vertices coincident
/// and the three vertices not collinear. A triangle reachable through a
/// [`Mesh`](crate::Mesh) always references canonical pooled coordinates.
///
/// # Example
///
/// ```
/// use model3d_types::{GeometryError, Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     None,
/// )
/// .unwrap();
/// // Auto-computed normal is the raw cross product, here (0, 0, 1).
/// assert_eq!(tri.normal().as_vector().z, 1.0);
///
/// let collinear = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     None,
/// );
/// assert_eq!(collinear.unwrap_err(), GeometryError::CollinearVertices);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    vertices: [Point3<f64>; 3],
    normal: Normal,
}

impl Triangle {
    /// Create a triangle, validating non-degeneracy.
    ///
    /// When `normal` is `None` it is computed as the cross product of
    /// `(p2 - p1)` and `(p3 - p2)`, without normalization.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::CoincidentVertices`] if any two vertices are equal
    ///   within tolerance.
    /// - [`GeometryError::CollinearVertices`] if the third vertex lies on
    ///   the segment between the first two.
    /// - [`GeometryError::ZeroLengthVector`] if no normal was supplied and
    ///   the computed cross product is zero (near-degenerate geometry that
    ///   slipped past the collinearity predicate).
    pub fn new(
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
        normal: Option<Normal>,
    ) -> Result<Self, GeometryError> {
        if p1.coincident(&p2) || p1.coincident(&p3) || p2.coincident(&p3) {
            return Err(GeometryError::CoincidentVertices);
        }
        if Edge::new(p1, p2).contains(&p3) {
            return Err(GeometryError::CollinearVertices);
        }

        let normal = match normal {
            Some(n) => n,
            None => Normal::from_vector((p2 - p1).cross(&(p3 - p2)))?,
        };

        Ok(Self {
            vertices: [p1, p2, p3],
            normal,
        })
    }

    /// Rebuild a triangle from already-validated pooled data.
    pub(crate) const fn from_pooled(vertices: [Point3<f64>; 3], normal: Normal) -> Self {
        Self { vertices, normal }
    }

    /// The three vertices, in construction order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        self.vertices
    }

    /// The triangle's normal.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Normal {
        self.normal
    }

    /// Intersect with the horizontal plane `z = target_z`.
    ///
    /// Each of the three edges contributes an interpolated (x, y) point when
    /// its endpoints strictly straddle `target_z`; a vertex whose z exactly
    /// equals `target_z` is appended at most once (first match only). The
    /// result may hold 0 to 4 points; callers accept exactly-2-point results
    /// as cross-section segments and drop everything else.
    ///
    /// The strict straddle combined with the single-vertex branch means
    /// exact-boundary geometry can under- or over-count points. In
    /// particular a triangle lying entirely in the target plane contributes
    /// only its first vertex and therefore no segment.
    #[must_use]
    pub fn intersect_at_z(&self, target_z: f64) -> Vec<Point2<f64>> {
        let [a, b, c] = self.vertices;
        let mut points = Vec::with_capacity(2);

        for (p, q) in [(a, b), (a, c), (b, c)] {
            if (p.z > target_z && q.z < target_z) || (p.z < target_z && q.z > target_z) {
                points.push(interpolate_at_z(&p, &q, target_z));
            }
        }

        #[allow(clippy::float_cmp)] // exact coincidence is the documented policy
        if a.z == target_z {
            points.push(Point2::new(a.x, a.y));
        } else if b.z == target_z {
            points.push(Point2::new(b.x, b.y));
        } else if c.z == target_z {
            points.push(Point2::new(c.x, c.y));
        }

        points
    }

    /// Intersect with an arbitrary plane.
    ///
    /// Each edge is tested with the parametric line-plane method (see
    /// [`Plane::intersect_segment`]); up to three 3D points may result. As
    /// with [`Triangle::intersect_at_z`], only exactly-2-point results form
    /// valid cross-section segments downstream.
    #[must_use]
    pub fn intersect_with_plane(&self, plane: &Plane) -> Vec<Point3<f64>> {
        let [a, b, c] = self.vertices;
        [(a, b), (a, c), (b, c)]
            .into_iter()
            .filter_map(|(p, q)| plane.intersect_segment(&p, &q))
            .collect()
    }
}

/// Linear interpolation of (x, y) at the z crossing between `a` and `b`.
///
/// Callers guarantee `a.z != b.z` via the strict straddle test.
fn interpolate_at_z(a: &Point3<f64>, b: &Point3<f64>, target_z: f64) -> Point2<f64> {
    let n = (target_z - a.z) / (b.z - a.z);
    Point2::new(n.mul_add(b.x - a.x, a.x), n.mul_add(b.y - a.y, a.y))
}
