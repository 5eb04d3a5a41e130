//! Core model types for model3d.
//!
//! This crate provides the data model for triangulated surface meshes and
//! the per-triangle plane-intersection algorithms:
//!
//! - [`Mesh`] - Deduplicated vertex/normal pools, ordered facets, extents
//! - [`Triangle`] - Validated triangle with both intersection algorithms
//! - [`Normal`] - Direction vector with a nonzero-magnitude invariant
//! - [`Edge`] - Undirected segment predicate helper
//! - [`Plane`] / [`Axis`] - Cutting plane and 2D projection axes
//! - [`CoordKey`] / [`PointExt`] - Canonical coordinate identity
//!
//! # Two notions of coordinate equality
//!
//! Geometric predicates use per-axis tolerance equality
//! ([`PointExt::coincident`], epsilon `1e-7`); the dedup pools use an exact
//! formatted-content key ([`PointExt::key`], six fractional digits). The two
//! intentionally diverge near formatting rounding boundaries and the mesh's
//! correctness depends on keeping them separate.
//!
//! # Units and coordinates
//!
//! Unit-agnostic, all coordinates `f64`, right-handed axes with Z as the
//! customary slicing direction.
//!
//! # Example
//!
//! ```
//! use model3d_types::{Mesh, Point3};
//!
//! let mut mesh = Mesh::with_name("wedge");
//! mesh.add_triangle(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 2.0, 2.0),
//!     None,
//! )?;
//!
//! let tri = mesh.triangle(0).ok_or(model3d_types::GeometryError::EmptyMesh)?;
//! assert_eq!(tri.intersect_at_z(1.0).len(), 2);
//! # Ok::<(), model3d_types::GeometryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod edge;
mod error;
mod extents;
mod mesh;
mod normal;
mod plane;
mod point;
mod stats;
mod triangle;

pub use edge::Edge;
pub use error::GeometryError;
pub use extents::Extents;
pub use mesh::{Facet, Mesh};
pub use normal::Normal;
pub use plane::{Axis, Plane, PLANE_PARALLEL_EPSILON};
pub use point::{CoordKey, PointExt, COINCIDENT_EPSILON};
pub use stats::MeshStats;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
