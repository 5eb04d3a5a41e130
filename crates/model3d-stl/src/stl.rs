//! STL (Stereolithography) loading.
//!
//! Supports both ASCII and binary STL formats.
//!
//! # Format Detection
//!
//! The loader automatically detects whether a file is ASCII or binary:
//! - ASCII files start with "solid" (after optional whitespace)
//! - Binary files have an 80-byte header followed by a facet count
//!
//! Binary files whose header happens to start with "solid" are still
//! detected as binary when the header contains NUL bytes.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (model name, when present, follows "solid")
//! UINT32       – Number of facets
//! foreach facet
//!     REAL32[3] – Normal vector (zero vectors are recomputed)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

use std::path::Path;

use model3d_types::{Mesh, Normal, Point3, Vector3};
use tracing::{info, warn};

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one facet record in binary STL (normal + 3 vertices + attribute).
const FACET_SIZE: usize = 50;

/// Model name used when a file carries none.
const DEFAULT_NAME: &str = "unknown";

/// How to treat facets that describe invalid geometry (coincident or
/// collinear vertices).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegenerateFacets {
    /// Drop the offending facet, log a warning, and keep loading.
    #[default]
    Skip,
    /// Abort the load with [`StlError::DegenerateFacet`].
    Reject,
}

/// Load a mesh from an STL file, skipping degenerate facets.
///
/// Automatically detects ASCII vs binary format. Equivalent to
/// [`load_stl_with`] with [`DegenerateFacets::Skip`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not
/// valid STL.
///
/// # Example
///
/// ```no_run
/// use model3d_stl::load_stl;
///
/// let mesh = load_stl("model.stl").unwrap();
/// println!("Loaded {} triangles", mesh.triangle_count());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> StlResult<Mesh> {
    load_stl_with(path, DegenerateFacets::default())
}

/// Load a mesh from an STL file with an explicit degenerate-facet policy.
///
/// # Errors
///
/// Returns an error if the file cannot be read, its content is not valid
/// STL, or (under [`DegenerateFacets::Reject`]) a facet describes invalid
/// geometry.
pub fn load_stl_with<P: AsRef<Path>>(path: P, policy: DegenerateFacets) -> StlResult<Mesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StlError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StlError::Io(e)
        }
    })?;
    read_stl(&bytes, policy)
}

/// Decode STL content from an in-memory byte buffer.
///
/// # Errors
///
/// Returns an error if the content is not valid STL, or (under
/// [`DegenerateFacets::Reject`]) a facet describes invalid geometry.
pub fn read_stl(bytes: &[u8], policy: DegenerateFacets) -> StlResult<Mesh> {
    if bytes.len() < 6 {
        return Err(StlError::invalid_content("file too small to be valid STL"));
    }

    if is_ascii_stl(bytes) {
        parse_ascii(bytes, policy)
    } else {
        parse_binary(bytes, policy)
    }
}

/// ASCII files start with "solid" and have a NUL-free header region.
fn is_ascii_stl(bytes: &[u8]) -> bool {
    let prefix = &bytes[..bytes.len().min(HEADER_SIZE)];
    if prefix.contains(&0) {
        return false;
    }
    String::from_utf8_lossy(prefix).trim_start().starts_with("solid")
}

fn parse_binary(bytes: &[u8], policy: DegenerateFacets) -> StlResult<Mesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(StlError::invalid_content(
            "binary STL truncated before facet count",
        ));
    }

    let declared = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let payload = &bytes[HEADER_SIZE + 4..];
    #[allow(clippy::cast_possible_truncation)]
    // Record count fits u32: the payload of a valid file is declared * 50 bytes
    let available = (payload.len() / FACET_SIZE) as u32;
    // The payload must hold exactly the declared records: short files,
    // surplus records, and trailing partial bytes are all rejected.
    if payload.len() != declared as usize * FACET_SIZE {
        return Err(StlError::FacetCountMismatch {
            expected: declared,
            got: available,
        });
    }

    let mut mesh = Mesh::with_name(binary_model_name(&bytes[..HEADER_SIZE]));
    let mut skipped = 0usize;

    for index in 0..declared as usize {
        let record = &payload[index * FACET_SIZE..(index + 1) * FACET_SIZE];
        let normal = Vector3::new(
            read_f32(record, 0),
            read_f32(record, 4),
            read_f32(record, 8),
        );
        let v1 = read_point(record, 12);
        let v2 = read_point(record, 24);
        let v3 = read_point(record, 36);
        add_facet(&mut mesh, index, v1, v2, v3, normal, policy, &mut skipped)?;
    }

    info!(
        name = mesh.name(),
        triangles = mesh.triangle_count(),
        skipped,
        "loaded binary STL"
    );
    Ok(mesh)
}

/// Model name from the 80-byte binary header: the text after "solid",
/// trimmed of NULs and whitespace.
fn binary_model_name(header: &[u8]) -> String {
    let text = String::from_utf8_lossy(header);
    let trimmed = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    let name = trimmed.strip_prefix("solid").unwrap_or(trimmed).trim();
    if name.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        name.to_owned()
    }
}

fn read_f32(buf: &[u8], offset: usize) -> f64 {
    f64::from(f32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ]))
}

fn read_point(buf: &[u8], offset: usize) -> Point3<f64> {
    Point3::new(
        read_f32(buf, offset),
        read_f32(buf, offset + 4),
        read_f32(buf, offset + 8),
    )
}

fn parse_ascii(bytes: &[u8], policy: DegenerateFacets) -> StlResult<Mesh> {
    let text = String::from_utf8_lossy(bytes);

    let mut mesh = Mesh::with_name(ascii_model_name(&text));
    let mut pending_normal: Option<Vector3<f64>> = None;
    let mut vertices: Vec<Point3<f64>> = Vec::with_capacity(3);
    let mut facet_index = 0usize;
    let mut skipped = 0usize;

    for line in text.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = parts.first() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "facet" => {
                pending_normal = if parts.len() >= 5 && parts[1].eq_ignore_ascii_case("normal") {
                    Some(Vector3::new(
                        parts[2].parse()?,
                        parts[3].parse()?,
                        parts[4].parse()?,
                    ))
                } else {
                    None
                };
            }
            "outer" => {
                vertices.clear();
            }
            "vertex" => {
                if parts.len() >= 4 {
                    vertices.push(Point3::new(
                        parts[1].parse()?,
                        parts[2].parse()?,
                        parts[3].parse()?,
                    ));
                }
            }
            "endfacet" => {
                if vertices.len() == 3 {
                    let normal = pending_normal.take().unwrap_or_else(Vector3::zeros);
                    add_facet(
                        &mut mesh,
                        facet_index,
                        vertices[0],
                        vertices[1],
                        vertices[2],
                        normal,
                        policy,
                        &mut skipped,
                    )?;
                } else {
                    warn!(
                        index = facet_index,
                        vertices = vertices.len(),
                        "facet does not have exactly three vertices"
                    );
                    skipped += 1;
                }
                facet_index += 1;
                vertices.clear();
            }
            "endsolid" => break,
            _ => {}
        }
    }

    info!(
        name = mesh.name(),
        triangles = mesh.triangle_count(),
        skipped,
        "loaded ASCII STL"
    );
    Ok(mesh)
}

/// Model name from the "solid ..." opening line.
fn ascii_model_name(text: &str) -> String {
    let name = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.trim().strip_prefix("solid"))
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        name.to_owned()
    }
}

/// Feed one decoded facet into the mesh, applying the degenerate policy.
///
/// A zero raw normal falls back to the computed normal inside
/// `add_triangle`.
#[allow(clippy::too_many_arguments)]
fn add_facet(
    mesh: &mut Mesh,
    index: usize,
    v1: Point3<f64>,
    v2: Point3<f64>,
    v3: Point3<f64>,
    raw_normal: Vector3<f64>,
    policy: DegenerateFacets,
    skipped: &mut usize,
) -> StlResult<()> {
    let normal = Normal::from_vector(raw_normal).ok();
    match mesh.add_triangle(v1, v2, v3, normal) {
        Ok(()) => Ok(()),
        Err(source) => match policy {
            DegenerateFacets::Skip => {
                warn!(index, %source, "skipping degenerate facet");
                *skipped += 1;
                Ok(())
            }
            DegenerateFacets::Reject => Err(StlError::DegenerateFacet { index, source }),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SINGLE_FACET: &[u8] = b"solid widget
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid widget
";

    /// One binary facet record: normal, three vertices, attribute bytes.
    fn facet_record(normal: [f32; 3], vertices: [[f32; 3]; 3]) -> Vec<u8> {
        let mut record = Vec::with_capacity(FACET_SIZE);
        for value in normal {
            record.extend_from_slice(&value.to_le_bytes());
        }
        for vertex in vertices {
            for value in vertex {
                record.extend_from_slice(&value.to_le_bytes());
            }
        }
        record.extend_from_slice(&0u16.to_le_bytes());
        record
    }

    fn binary_stl(name: &str, records: &[Vec<u8>]) -> Vec<u8> {
        let mut header = vec![0u8; HEADER_SIZE];
        let text = format!("solid {name}");
        header[..text.len()].copy_from_slice(text.as_bytes());

        let mut bytes = header;
        #[allow(clippy::cast_possible_truncation)]
        bytes.extend_from_slice(&(records.len() as u32).to_le_bytes());
        for record in records {
            bytes.extend_from_slice(record);
        }
        bytes
    }

    #[test]
    fn ascii_single_facet() {
        let mesh = read_stl(SINGLE_FACET, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.name(), "widget");
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn ascii_zero_normal_is_recomputed() {
        let content = b"solid flat
  facet normal 0 0 0
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid flat
";
        let mesh = read_stl(content, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.normal_count(), 1);

        let direction = mesh.normals()[0].as_vector();
        assert_relative_eq!(direction.x, 0.0);
        assert_relative_eq!(direction.y, 0.0);
        assert_relative_eq!(direction.z, 1.0);
    }

    #[test]
    fn ascii_supplied_normal_is_kept() {
        let content = b"solid tilt
  facet normal 0 0 2.5
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid tilt
";
        let mesh = read_stl(content, DegenerateFacets::Skip).unwrap();
        // Normals are stored as supplied, without normalisation.
        assert_eq!(mesh.normals()[0].as_vector().z, 2.5);
    }

    #[test]
    fn ascii_missing_name_defaults() {
        let content = b"solid
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid
";
        let mesh = read_stl(content, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.name(), "unknown");
    }

    #[test]
    fn degenerate_facet_skipped_by_default() {
        let content = b"solid broken
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 0 0 0
      vertex 0 1 0
    endloop
  endfacet
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid broken
";
        let mesh = read_stl(content, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.triangle_count(), 1);

        let result = read_stl(content, DegenerateFacets::Reject);
        assert!(matches!(
            result,
            Err(StlError::DegenerateFacet { index: 0, .. })
        ));
    }

    #[test]
    fn binary_single_facet() {
        let bytes = binary_stl(
            "widget",
            &[facet_record(
                [0.0, 0.0, 1.0],
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            )],
        );

        let mesh = read_stl(&bytes, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.name(), "widget");
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices()[1].x, 1.0);
    }

    #[test]
    fn binary_header_starting_with_solid_is_detected() {
        // The NUL padding in the header marks the file as binary even
        // though it starts with "solid".
        let bytes = binary_stl(
            "imposter",
            &[facet_record(
                [0.0, 0.0, 1.0],
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            )],
        );
        assert!(!is_ascii_stl(&bytes));

        let mesh = read_stl(&bytes, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn binary_facet_count_mismatch() {
        let mut bytes = binary_stl(
            "short",
            &[facet_record(
                [0.0, 0.0, 1.0],
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            )],
        );
        // Declare two facets but provide one.
        bytes[HEADER_SIZE..HEADER_SIZE + 4].copy_from_slice(&2u32.to_le_bytes());

        let result = read_stl(&bytes, DegenerateFacets::Skip);
        assert!(matches!(
            result,
            Err(StlError::FacetCountMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn binary_surplus_records_rejected() {
        let record = facet_record(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        );
        let mut bytes = binary_stl("long", &[record.clone(), record]);
        // Declare one facet but provide two.
        bytes[HEADER_SIZE..HEADER_SIZE + 4].copy_from_slice(&1u32.to_le_bytes());

        let result = read_stl(&bytes, DegenerateFacets::Skip);
        assert!(matches!(
            result,
            Err(StlError::FacetCountMismatch {
                expected: 1,
                got: 2
            })
        ));
    }

    #[test]
    fn binary_trailing_partial_bytes_rejected() {
        let mut bytes = binary_stl(
            "ragged",
            &[facet_record(
                [0.0, 0.0, 1.0],
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            )],
        );
        bytes.extend_from_slice(&[0u8; 7]);

        let result = read_stl(&bytes, DegenerateFacets::Skip);
        assert!(matches!(
            result,
            Err(StlError::FacetCountMismatch {
                expected: 1,
                got: 1
            })
        ));
    }

    #[test]
    fn binary_empty_header_name_defaults() {
        let mut bytes = binary_stl("x", &[]);
        bytes[..HEADER_SIZE].fill(0);

        let mesh = read_stl(&bytes, DegenerateFacets::Skip).unwrap();
        assert_eq!(mesh.name(), "unknown");
        assert!(mesh.is_empty());
    }

    #[test]
    fn truncated_input_rejected() {
        assert!(matches!(
            read_stl(b"sol", DegenerateFacets::Skip),
            Err(StlError::InvalidContent { .. })
        ));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.stl");
        std::fs::write(&path, SINGLE_FACET).unwrap();

        let mesh = load_stl(&path).unwrap();
        assert_eq!(mesh.name(), "widget");
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("no_such_model_12345.stl");
        assert!(matches!(result, Err(StlError::FileNotFound { .. })));
    }
}
