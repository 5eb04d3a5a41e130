//! Planar cross-sections of triangle meshes.
//!
//! This crate cuts a [`model3d_types::Mesh`] with a plane and returns the
//! resulting 2D line segments. Two families of passes are provided:
//!
//! - [`slice_at_z`] / [`slice_at_z_parallel`] for the common horizontal
//!   plane `z = const`, producing segments directly in the XY plane.
//! - [`slice_with_plane`] / [`slice_with_plane_parallel`] for an arbitrary
//!   plane, projecting segments into a local frame defined by two in-plane
//!   reference axes.
//!
//! The output is an unordered bag of [`Segment2`] values in triangle
//! insertion order; no contour chaining or loop closing is attempted.
//! Triangles whose intersection does not yield exactly two points are
//! dropped.
//!
//! # Example
//!
//! ```
//! use model3d_section::slice_at_z;
//! use model3d_types::{Mesh, Point3};
//!
//! let mut mesh = Mesh::new();
//! mesh.add_triangle(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 2.0, 2.0),
//!     None,
//! )
//! .unwrap();
//!
//! let segments = slice_at_z(&mesh, 1.0);
//! assert_eq!(segments.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
mod segment;
mod slicer;

pub use error::SectionError;
pub use params::SectionParams;
pub use segment::Segment2;
pub use slicer::{slice_at_z, slice_at_z_parallel, slice_with_plane, slice_with_plane_parallel};

pub use nalgebra::Point2;
