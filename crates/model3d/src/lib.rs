//! Triangle mesh models with pooled geometry and planar cross-sections.
//!
//! This umbrella crate re-exports the model3d-* crates, providing a unified
//! API for building meshes, loading STL files, and slicing with planes.
//!
//! # Quick Start
//!
//! ```no_run
//! use model3d::prelude::*;
//!
//! // Load a mesh (binary or ASCII STL, detected automatically)
//! let mesh = model3d::stl::load_stl("model.stl").unwrap();
//!
//! // Inspect it
//! let stats = mesh.stats().unwrap();
//! println!("{}: {} triangles", stats.name, stats.triangles);
//!
//! // Cut a horizontal cross-section through its centre
//! let centre = mesh.centre().unwrap();
//! let segments = slice_at_z(&mesh, centre.z);
//! println!("{} segments", segments.len());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `Mesh`, `Triangle`, `Normal`, `Edge`,
//!   `Plane`, `Axis`, `Extents`
//! - [`section`] - Planar cross-section slicing, sequential and parallel
//! - [`stl`] - STL file loading (binary and ASCII)
//!
//! # Feature Flags
//!
//! - `serde` - Serialization support for the core types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

/// Core data structures: `Mesh`, `Triangle`, `Normal`, `Edge`, `Plane`.
pub use model3d_types as types;

/// Planar cross-section slicing.
pub use model3d_section as section;

/// STL file loading (binary and ASCII).
pub use model3d_stl as stl;

/// Common imports for mesh modelling and slicing.
///
/// # Usage
///
/// ```
/// use model3d::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use model3d_types::{
        Axis, Edge, Extents, GeometryError, Mesh, MeshStats, Normal, Plane, Point2, Point3,
        PointExt, Triangle, Vector3,
    };

    // Sectioning
    pub use model3d_section::{
        slice_at_z, slice_at_z_parallel, slice_with_plane, slice_with_plane_parallel,
        SectionParams, Segment2,
    };

    // STL input
    pub use model3d_stl::{load_stl, load_stl_with, read_stl, DegenerateFacets};
}
