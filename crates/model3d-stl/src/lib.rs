//! STL input for model3d meshes.
//!
//! Loads binary and ASCII STL files into a [`model3d_types::Mesh`],
//! pooling duplicate vertices and normals along the way. Format detection
//! is automatic. Facets that describe invalid geometry are skipped with a
//! warning by default; [`DegenerateFacets::Reject`] turns them into load
//! errors instead.
//!
//! # Example
//!
//! ```
//! use model3d_stl::{read_stl, DegenerateFacets};
//!
//! let content = b"solid widget
//!   facet normal 0 0 1
//!     outer loop
//!       vertex 0 0 0
//!       vertex 1 0 0
//!       vertex 0 1 0
//!     endloop
//!   endfacet
//! endsolid widget
//! ";
//!
//! let mesh = read_stl(content, DegenerateFacets::Skip).unwrap();
//! assert_eq!(mesh.name(), "widget");
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{StlError, StlResult};
pub use stl::{load_stl, load_stl_with, read_stl, DegenerateFacets};
