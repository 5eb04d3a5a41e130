//! Validated direction vectors.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::point::{CoordKey, PointExt};

/// A direction vector with nonzero magnitude.
///
/// Construction fails on a zero-length input; that is the only invariant.
/// The direction is *not* normalized to unit length, because callers pass
/// raw cross-product components and the mesh's normal pool keys on the raw
/// values.
///
/// # Example
///
/// ```
/// use model3d_types::{GeometryError, Normal};
///
/// let n = Normal::new(0.0, 0.0, 2.0).unwrap();
/// assert_eq!(n.as_vector().z, 2.0);
///
/// assert_eq!(
///     Normal::new(0.0, 0.0, 0.0).unwrap_err(),
///     GeometryError::ZeroLengthVector,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Normal {
    direction: Vector3<f64>,
}

impl Normal {
    /// Create a normal from raw components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`] if the magnitude is zero.
    pub fn new(dx: f64, dy: f64, dz: f64) -> Result<Self, GeometryError> {
        Self::from_vector(Vector3::new(dx, dy, dz))
    }

    /// Create a normal from an existing vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`] if the magnitude is zero.
    pub fn from_vector(direction: Vector3<f64>) -> Result<Self, GeometryError> {
        if direction.norm() == 0.0 {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(Self { direction })
    }

    /// The underlying direction vector.
    #[inline]
    #[must_use]
    pub const fn as_vector(&self) -> Vector3<f64> {
        self.direction
    }

    /// Canonical content key, used by the mesh's normal pool.
    #[inline]
    #[must_use]
    pub fn key(&self) -> CoordKey {
        self.direction.key()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_length_rejected() {
        assert_eq!(
            Normal::new(0.0, 0.0, 0.0),
            Err(GeometryError::ZeroLengthVector)
        );
        assert_eq!(
            Normal::from_vector(Vector3::zeros()),
            Err(GeometryError::ZeroLengthVector)
        );
    }

    #[test]
    fn not_normalized() {
        let n = Normal::new(0.0, 3.0, 4.0).unwrap();
        assert_relative_eq!(n.as_vector().norm(), 5.0);
    }

    #[test]
    fn key_matches_raw_components() {
        let n = Normal::new(1.0, 0.0, 0.0).unwrap();
        assert_eq!(n.key(), Vector3::new(1.0, 0.0, 0.0).key());
    }
}
