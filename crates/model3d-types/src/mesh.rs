//! The deduplicated mesh model.

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

use crate::error::GeometryError;
use crate::extents::Extents;
use crate::normal::Normal;
use crate::point::{CoordKey, PointExt};
use crate::stats::MeshStats;
use crate::triangle::Triangle;

/// A facet: indices into the owning mesh's vertex and normal pools.
///
/// Facets are lightweight handles; resolve one into a concrete
/// [`Triangle`] through [`Mesh::triangle`] or [`Mesh::triangles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facet {
    /// Vertex pool indices, in insertion order.
    pub vertices: [u32; 3],
    /// Normal pool index.
    pub normal: u32,
}

/// A triangulated surface model with deduplicated vertex and normal pools.
///
/// Vertices and normals are interned by their canonical [`CoordKey`]
/// (first-seen wins), so every facet references the single pooled instance
/// for its coordinates. Triangles are kept in insertion order. Extents and
/// centroid accumulators are maintained incrementally. [`Mesh::add_triangle`]
/// is the sole mutator and requires `&mut self`; the read-only queries and
/// triangle iteration are freely shareable across threads.
///
/// # Example
///
/// ```
/// use model3d_types::{Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_triangle(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    vertex_pool: Vec<Point3<f64>>,
    vertex_index: HashMap<CoordKey, u32>,
    normal_pool: Vec<Normal>,
    normal_index: HashMap<CoordKey, u32>,
    facets: Vec<Facet>,
    extents: Option<Extents>,
    coord_sum: Vector3<f64>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            name: String::new(),
            vertex_pool: Vec::new(),
            vertex_index: HashMap::new(),
            normal_pool: Vec::new(),
            normal_index: HashMap::new(),
            facets: Vec::new(),
            extents: None,
            coord_sum: Vector3::zeros(),
        }
    }
}

impl Mesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with a model name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The model name ("" when the source supplied none).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the model name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a triangle from three raw vertices and an optional normal.
    ///
    /// Each vertex is interned into the vertex pool by its canonical key,
    /// replacing the caller's value with the pooled one; the triangle is
    /// then validated against the canonical coordinates. When no normal is
    /// supplied the triangle's auto-computed cross-product normal is used.
    /// The normal is interned the same way.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from triangle validation (coincident or
    /// collinear vertices, or a zero cross product when auto-computing the
    /// normal). A failed insertion leaves the facet list and extents
    /// untouched; interned vertices stay in the pool, where unreferenced
    /// entries only affect the unique-vertex count.
    pub fn add_triangle(
        &mut self,
        v1: Point3<f64>,
        v2: Point3<f64>,
        v3: Point3<f64>,
        normal: Option<Normal>,
    ) -> Result<(), GeometryError> {
        let i1 = self.intern_vertex(v1);
        let i2 = self.intern_vertex(v2);
        let i3 = self.intern_vertex(v3);

        let p1 = self.vertex_pool[i1 as usize];
        let p2 = self.vertex_pool[i2 as usize];
        let p3 = self.vertex_pool[i3 as usize];

        let triangle = Triangle::new(p1, p2, p3, normal)?;
        let ni = self.intern_normal(triangle.normal());

        self.facets.push(Facet {
            vertices: [i1, i2, i3],
            normal: ni,
        });
        self.update_extents(&[p1, p2, p3]);

        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    // Pool indices are u32; meshes with >4B unique vertices are unsupported
    fn intern_vertex(&mut self, point: Point3<f64>) -> u32 {
        match self.vertex_index.entry(point.key()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let index = self.vertex_pool.len() as u32;
                self.vertex_pool.push(point);
                entry.insert(index);
                index
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn intern_normal(&mut self, normal: Normal) -> u32 {
        match self.normal_index.entry(normal.key()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let index = self.normal_pool.len() as u32;
                self.normal_pool.push(normal);
                entry.insert(index);
                index
            }
        }
    }

    /// On the first triangle, seed min = max = the first vertex and zero
    /// the accumulators; every triangle then adds all three vertices to the
    /// running sum and widens the bounds vertex by vertex.
    fn update_extents(&mut self, vertices: &[Point3<f64>; 3]) {
        if self.extents.is_none() {
            self.extents = Some(Extents::from_point(vertices[0]));
            self.coord_sum = Vector3::zeros();
        }

        for vertex in vertices {
            self.coord_sum += vertex.coords;
        }

        if let Some(extents) = self.extents.as_mut() {
            for vertex in vertices {
                extents.widen(vertex);
            }
        }
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    /// Number of unique pooled vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_pool.len()
    }

    /// Number of unique pooled normals.
    #[inline]
    #[must_use]
    pub fn normal_count(&self) -> usize {
        self.normal_pool.len()
    }

    /// True when the mesh holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// The facet handles, in insertion order.
    #[inline]
    #[must_use]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// The canonical vertex pool.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertex_pool
    }

    /// The canonical normal pool.
    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[Normal] {
        &self.normal_pool
    }

    /// Resolve the facet at `index` into a concrete triangle.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        self.facets.get(index).map(|facet| self.resolve(facet))
    }

    /// Iterate all triangles in insertion order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().map(|facet| self.resolve(facet))
    }

    fn resolve(&self, facet: &Facet) -> Triangle {
        let [i1, i2, i3] = facet.vertices;
        Triangle::from_pooled(
            [
                self.vertex_pool[i1 as usize],
                self.vertex_pool[i2 as usize],
                self.vertex_pool[i3 as usize],
            ],
            self.normal_pool[facet.normal as usize],
        )
    }

    /// Per-axis bounding extents, or `None` before the first triangle.
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Option<Extents> {
        self.extents
    }

    /// Midpoint of the bounding box, or `None` on an empty mesh.
    #[must_use]
    pub fn centre(&self) -> Option<Point3<f64>> {
        self.extents.map(|e| e.centre())
    }

    /// Mean of all vertex occurrences: the coordinate sum divided by three
    /// times the triangle count, so a vertex shared by several triangles
    /// counts once per reference. `None` on an empty mesh.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // triangle counts fit f64 exactly in practice
    pub fn mean_point(&self) -> Option<Point3<f64>> {
        if self.facets.is_empty() {
            return None;
        }
        let corners = 3.0 * self.facets.len() as f64;
        Some(Point3::from(self.coord_sum / corners))
    }

    /// Summary statistics for the model.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyMesh`] when no triangle has been added,
    /// since extents and centroids are undefined.
    pub fn stats(&self) -> Result<MeshStats, GeometryError> {
        let extents = self.extents.ok_or(GeometryError::EmptyMesh)?;
        let mean_point = self.mean_point().ok_or(GeometryError::EmptyMesh)?;

        Ok(MeshStats {
            name: self.name.clone(),
            triangles: self.facets.len(),
            vertices: self.vertex_pool.len(),
            normals: self.normal_pool.len(),
            extents,
            centre: extents.centre(),
            mean_point,
        })
    }
}
