//! Model summary statistics.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::extents::Extents;

/// Summary of a mesh: pool sizes, extents and centroids.
///
/// Produced by [`Mesh::stats`](crate::Mesh::stats); only defined for a mesh
/// holding at least one triangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshStats {
    /// Model name as reported by the input source.
    pub name: String,
    /// Number of triangles, counting duplicates.
    pub triangles: usize,
    /// Number of unique pooled vertices.
    pub vertices: usize,
    /// Number of unique pooled normals.
    pub normals: usize,
    /// Bounding extents across all vertices.
    pub extents: Extents,
    /// Midpoint of the bounding box.
    pub centre: Point3<f64>,
    /// Mean of all vertex occurrences (one per triangle corner, so shared
    /// vertices count once per referencing triangle).
    pub mean_point: Point3<f64>,
}
