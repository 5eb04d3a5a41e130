//! Error types for mesh model construction and queries.

use thiserror::Error;

/// Errors produced when constructing geometry or querying an empty mesh.
///
/// Triangle-level failures are local: a rejected triangle leaves the rest
/// of the mesh untouched, and callers feeding a stream of facets decide
/// whether to skip the bad record or abort the load.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A direction vector (normal, plane normal, or axis) has zero magnitude.
    #[error("vector has zero length")]
    ZeroLengthVector,

    /// Two of a triangle's vertices are equal within tolerance.
    #[error("degenerate triangle: coincident vertices")]
    CoincidentVertices,

    /// A triangle's third vertex lies on the segment between the first two.
    #[error("degenerate triangle: collinear vertices")]
    CollinearVertices,

    /// An aggregate query was made against a mesh with no triangles.
    #[error("mesh has no triangles")]
    EmptyMesh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", GeometryError::ZeroLengthVector),
            "vector has zero length"
        );
        assert!(format!("{}", GeometryError::CoincidentVertices).contains("coincident"));
        assert!(format!("{}", GeometryError::CollinearVertices).contains("collinear"));
    }
}
