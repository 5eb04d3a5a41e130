//! Whole-mesh slicing passes.
//!
//! A slice iterates every triangle (insertion order), intersects it with the
//! cutting plane, and keeps only exactly-2-point results as segments. The
//! per-triangle work is independent and read-only against the shared mesh,
//! so the `_parallel` variants partition the triangle list across rayon
//! workers; ordered collection keeps their output identical to the
//! sequential passes.

use model3d_types::{Axis, Mesh, Plane, Point3, Triangle};
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::SectionError;
use crate::params::SectionParams;
use crate::segment::Segment2;

/// Slice a mesh with the horizontal plane `z = target_z`.
///
/// Returns one segment per triangle whose intersection yields exactly two
/// points, in triangle insertion order. Triangles producing 0, 1, or more
/// than 2 intersection points are silently dropped; that is the documented
/// contract, not an error condition. The output is a bag of segments with
/// no connectivity guarantee.
///
/// # Example
///
/// ```
/// use model3d_section::slice_at_z;
/// use model3d_types::{Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_triangle(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(0.0, 2.0, 2.0),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(slice_at_z(&mesh, 1.0).len(), 1);
/// assert!(slice_at_z(&mesh, 5.0).is_empty());
/// ```
#[must_use]
pub fn slice_at_z(mesh: &Mesh, target_z: f64) -> Vec<Segment2> {
    debug!(
        triangles = mesh.triangle_count(),
        target_z, "slicing at constant z"
    );

    let segments: Vec<Segment2> = mesh
        .triangles()
        .filter_map(|triangle| segment_at_z(&triangle, target_z))
        .collect();

    debug!(segments = segments.len(), "constant-z slice complete");
    segments
}

/// Parallel version of [`slice_at_z`]; output is identical.
#[must_use]
pub fn slice_at_z_parallel(mesh: &Mesh, target_z: f64) -> Vec<Segment2> {
    debug!(
        triangles = mesh.triangle_count(),
        target_z, "slicing at constant z"
    );

    let segments: Vec<Segment2> = (0..mesh.triangle_count())
        .into_par_iter()
        .filter_map(|index| {
            mesh.triangle(index)
                .and_then(|triangle| segment_at_z(&triangle, target_z))
        })
        .collect();

    debug!(segments = segments.len(), "constant-z slice complete");
    segments
}

/// Slice a mesh with an arbitrary plane, projecting segments into the
/// plane's local 2D frame.
///
/// Each accepted 3D intersection pair is converted to 2D by measuring every
/// point's unsigned perpendicular distance to `x_axis` and `y_axis`. With
/// the default [`SectionParams`] every triangle is processed in insertion
/// order; an explicit `sample_fraction` below 1.0 slices a uniformly chosen
/// subset instead (seedable for reproducibility). Sampled indices are
/// processed in ascending insertion order.
///
/// # Errors
///
/// Returns [`SectionError::InvalidSampleFraction`] when the configured
/// fraction is not in (0, 1].
pub fn slice_with_plane(
    mesh: &Mesh,
    plane: &Plane,
    x_axis: &Axis,
    y_axis: &Axis,
    params: &SectionParams,
) -> Result<Vec<Segment2>, SectionError> {
    let selected = select_indices(mesh.triangle_count(), params)?;

    let segments = match selected {
        None => mesh
            .triangles()
            .filter_map(|triangle| segment_with_plane(&triangle, plane, x_axis, y_axis))
            .collect(),
        Some(indices) => {
            info!(
                triangles = mesh.triangle_count(),
                sampled = indices.len(),
                "slicing sampled subset"
            );
            indices
                .iter()
                .filter_map(|&index| {
                    mesh.triangle(index)
                        .and_then(|triangle| segment_with_plane(&triangle, plane, x_axis, y_axis))
                })
                .collect()
        }
    };

    Ok(segments)
}

/// Parallel version of [`slice_with_plane`]; output is identical for the
/// same parameters (including the same seed when sampling).
pub fn slice_with_plane_parallel(
    mesh: &Mesh,
    plane: &Plane,
    x_axis: &Axis,
    y_axis: &Axis,
    params: &SectionParams,
) -> Result<Vec<Segment2>, SectionError> {
    let selected = select_indices(mesh.triangle_count(), params)?;

    let slice_one = |index: usize| {
        mesh.triangle(index)
            .and_then(|triangle| segment_with_plane(&triangle, plane, x_axis, y_axis))
    };

    let segments = match selected {
        None => (0..mesh.triangle_count())
            .into_par_iter()
            .filter_map(slice_one)
            .collect(),
        Some(indices) => {
            info!(
                triangles = mesh.triangle_count(),
                sampled = indices.len(),
                "slicing sampled subset"
            );
            indices.into_par_iter().filter_map(slice_one).collect()
        }
    };

    Ok(segments)
}

fn segment_at_z(triangle: &Triangle, target_z: f64) -> Option<Segment2> {
    let points = triangle.intersect_at_z(target_z);
    if points.len() == 2 {
        Some(Segment2::new(points[0], points[1]))
    } else {
        None
    }
}

fn segment_with_plane(
    triangle: &Triangle,
    plane: &Plane,
    x_axis: &Axis,
    y_axis: &Axis,
) -> Option<Segment2> {
    let points = triangle.intersect_with_plane(plane);
    if points.len() == 2 {
        Some(Segment2::new(
            project(&points[0], x_axis, y_axis),
            project(&points[1], x_axis, y_axis),
        ))
    } else {
        None
    }
}

fn project(point: &Point3<f64>, x_axis: &Axis, y_axis: &Axis) -> Point2<f64> {
    Point2::new(x_axis.distance(point), y_axis.distance(point))
}

/// Resolve the sampling configuration into triangle indices.
///
/// `None` means "every triangle". Sampled indices are sorted so the pass
/// keeps insertion order.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// keep-count is bounded by the triangle count, which fits usize
#[allow(clippy::cast_precision_loss)]
fn select_indices(
    count: usize,
    params: &SectionParams,
) -> Result<Option<Vec<usize>>, SectionError> {
    let fraction = params.sample_fraction;
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(SectionError::InvalidSampleFraction(fraction));
    }
    if !params.is_sampled() {
        return Ok(None);
    }

    let keep = ((count as f64) * fraction).ceil() as usize;
    let keep = keep.min(count);

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut indices = rand::seq::index::sample(&mut rng, count, keep).into_vec();
    indices.sort_unstable();
    Ok(Some(indices))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use model3d_types::Vector3;

    use super::*;

    /// Unit cube spanning [0, 1]^3, two triangles per face.
    fn unit_cube() -> Mesh {
        let corners = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ];
        let faces = [
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];

        let mut mesh = Mesh::with_name("cube");
        for [a, b, c] in faces {
            let p = |i: usize| Point3::new(corners[i][0], corners[i][1], corners[i][2]);
            mesh.add_triangle(p(a), p(b), p(c), None).unwrap();
        }
        mesh
    }

    fn total_length(segments: &[Segment2]) -> f64 {
        segments.iter().map(Segment2::length).sum()
    }

    /// Count how many segment endpoints match `point` within tolerance.
    fn endpoint_matches(segments: &[Segment2], point: Point2<f64>) -> usize {
        segments
            .iter()
            .flat_map(|s| [s.a, s.b])
            .filter(|p| (p - point).norm() < 1e-9)
            .count()
    }

    #[test]
    fn cube_pools_are_deduplicated() {
        let cube = unit_cube();
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.normal_count(), 6);
    }

    #[test]
    fn single_triangle_slice() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 2.0),
            None,
        )
        .unwrap();

        let segments = slice_at_z(&mesh, 1.0);
        assert_eq!(segments.len(), 1);

        assert!(slice_at_z(&mesh, 5.0).is_empty());
    }

    #[test]
    fn cube_slice_forms_closed_square() {
        let cube = unit_cube();
        let segments = slice_at_z(&cube, 0.5);

        // Four side faces, two triangles each; top and bottom contribute
        // nothing at z = 0.5.
        assert_eq!(segments.len(), 8);
        assert_relative_eq!(total_length(&segments), 4.0, epsilon = 1e-9);

        // Chained by shared endpoints the segments close into the expected
        // square: every boundary point is shared by exactly two segments.
        for point in [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.0),
            Point2::new(1.0, 0.5),
            Point2::new(0.5, 1.0),
            Point2::new(0.0, 0.5),
        ] {
            assert_eq!(endpoint_matches(&segments, point), 2);
        }
    }

    #[test]
    fn slice_is_idempotent() {
        let cube = unit_cube();
        let first = slice_at_z(&cube, 0.5);
        let second = slice_at_z(&cube, 0.5);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential() {
        let cube = unit_cube();
        assert_eq!(slice_at_z(&cube, 0.5), slice_at_z_parallel(&cube, 0.5));
    }

    #[test]
    fn plane_slice_of_cube() {
        let cube = unit_cube();
        let plane = Plane::new(Point3::new(0.0, 0.0, 0.5), Vector3::z()).unwrap();
        // In-plane axes: distance to the first gives |x|, to the second |y|.
        let x_axis = Axis::new(Point3::new(0.0, 0.0, 0.5), Vector3::y()).unwrap();
        let y_axis = Axis::new(Point3::new(0.0, 0.0, 0.5), Vector3::x()).unwrap();

        let segments =
            slice_with_plane(&cube, &plane, &x_axis, &y_axis, &SectionParams::default()).unwrap();

        assert_eq!(segments.len(), 8);
        assert_relative_eq!(total_length(&segments), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn plane_slice_parallel_matches_sequential() {
        let cube = unit_cube();
        let plane = Plane::new(Point3::new(0.0, 0.0, 0.5), Vector3::z()).unwrap();
        let x_axis = Axis::new(Point3::new(0.0, 0.0, 0.5), Vector3::y()).unwrap();
        let y_axis = Axis::new(Point3::new(0.0, 0.0, 0.5), Vector3::x()).unwrap();
        let params = SectionParams::default();

        let sequential = slice_with_plane(&cube, &plane, &x_axis, &y_axis, &params).unwrap();
        let parallel =
            slice_with_plane_parallel(&cube, &plane, &x_axis, &y_axis, &params).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let cube = unit_cube();
        let plane = Plane::new(Point3::new(0.0, 0.0, 0.5), Vector3::z()).unwrap();
        let x_axis = Axis::new(Point3::new(0.0, 0.0, 0.5), Vector3::y()).unwrap();
        let y_axis = Axis::new(Point3::new(0.0, 0.0, 0.5), Vector3::x()).unwrap();
        let params = SectionParams::default()
            .with_sample_fraction(0.5)
            .with_seed(1234);

        let first = slice_with_plane(&cube, &plane, &x_axis, &y_axis, &params).unwrap();
        let second = slice_with_plane(&cube, &plane, &x_axis, &y_axis, &params).unwrap();
        assert_eq!(first, second);

        // Half the triangles are sliced, so at most half the segments.
        let full =
            slice_with_plane(&cube, &plane, &x_axis, &y_axis, &SectionParams::default()).unwrap();
        assert!(first.len() <= full.len());
    }

    #[test]
    fn invalid_sample_fraction_rejected() {
        let cube = unit_cube();
        let plane = Plane::new(Point3::new(0.0, 0.0, 0.5), Vector3::z()).unwrap();
        let axis = Axis::new(Point3::origin(), Vector3::x()).unwrap();

        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let params = SectionParams::default().with_sample_fraction(bad);
            let result = slice_with_plane(&cube, &plane, &axis, &axis, &params);
            assert!(matches!(
                result,
                Err(SectionError::InvalidSampleFraction(_))
            ));
        }
    }

    #[test]
    fn empty_mesh_slices_to_nothing() {
        let mesh = Mesh::new();
        assert!(slice_at_z(&mesh, 0.0).is_empty());
        assert!(slice_at_z_parallel(&mesh, 0.0).is_empty());
    }
}
