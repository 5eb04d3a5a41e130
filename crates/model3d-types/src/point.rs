//! Coordinate identity: tolerance equality and content-derived dedup keys.
//!
//! A coordinate triple carries two distinct notions of sameness and they must
//! not be collapsed into one:
//!
//! - [`PointExt::coincident`] is the geometric predicate: each axis within a
//!   fixed epsilon. It is not transitive under floating-point noise and is
//!   never used for deduplication.
//! - [`PointExt::key`] is the canonical identity used by the mesh pools: a
//!   deterministic key derived from formatting each component with six
//!   fractional digits. Two points straddling a formatting rounding boundary
//!   can be `coincident` yet carry different keys; dedup correctness depends
//!   on key equality alone, so this discrepancy is intentional.

use nalgebra::{Point3, Vector3};

/// Per-axis difference below which two coordinates are considered equal.
pub const COINCIDENT_EPSILON: f64 = 1e-7;

/// Number of fractional digits retained by [`CoordKey`] formatting.
const KEY_PRECISION: usize = 6;

/// Canonical content key for a coordinate triple.
///
/// Two triples share a key exactly when every component prints identically
/// at six fractional digits. The key is an opaque `Eq + Hash` value intended
/// for use as a dedup-pool map key.
///
/// # Example
///
/// ```
/// use model3d_types::{CoordKey, Point3, PointExt};
///
/// let a = Point3::new(1.0, 2.0, 3.0);
/// let b = Point3::new(1.000_000_1, 2.0, 3.0); // differs past the 6th decimal
/// assert_eq!(a.key(), b.key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordKey(String);

impl CoordKey {
    fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self(format!(
            "({x:.p$}, {y:.p$}, {z:.p$})",
            p = KEY_PRECISION
        ))
    }

    /// The formatted representation backing this key.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity operations for coordinate triples.
///
/// Implemented for both [`Point3`] and [`Vector3`] so positions and normal
/// directions share one keying scheme.
pub trait PointExt {
    /// Canonical content key for deduplication.
    ///
    /// Deterministic: the same value always yields the same key.
    fn key(&self) -> CoordKey;

    /// Tolerance equality: true iff every axis differs by less than
    /// [`COINCIDENT_EPSILON`].
    ///
    /// Per-axis, not Euclidean. Not transitive.
    fn coincident(&self, other: &Self) -> bool;
}

impl PointExt for Point3<f64> {
    fn key(&self) -> CoordKey {
        CoordKey::from_components(self.x, self.y, self.z)
    }

    fn coincident(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < COINCIDENT_EPSILON
            && (self.y - other.y).abs() < COINCIDENT_EPSILON
            && (self.z - other.z).abs() < COINCIDENT_EPSILON
    }
}

impl PointExt for Vector3<f64> {
    fn key(&self) -> CoordKey {
        CoordKey::from_components(self.x, self.y, self.z)
    }

    fn coincident(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < COINCIDENT_EPSILON
            && (self.y - other.y).abs() < COINCIDENT_EPSILON
            && (self.z - other.z).abs() < COINCIDENT_EPSILON
    }
}
