//! Indexed triangle surface mesh.

use crate::{Aabb, Face, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh embedded in R³.
///
/// Vertices and faces are stored in dense, 0-based tables; faces reference
/// vertices by index with counter-clockwise winding viewed from outside.
/// The `vertices` and `faces` fields are public: they are the zero-copy
/// views handed to the hosting application.
///
/// The trailing domain-metadata fields (`closed`, `marker`,
/// `volume_constraint`, `use_volume_constraint`, `as_hole`) are carried
/// for the caller and never interpreted by the optimization passes.
///
/// # Example
///
/// ```
/// use tessel_types::{SurfaceMesh, Vertex, Face};
///
/// let mut mesh = SurfaceMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::new([0, 1, 2]));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex table.
    pub vertices: Vec<Vertex>,

    /// Face table. Each face is CCW when viewed from outside.
    pub faces: Vec<Face>,

    /// Whether the surface is expected to be closed.
    pub closed: bool,

    /// Domain marker for the enclosed region.
    pub marker: i32,

    /// Volume constraint for downstream volumetric meshing.
    pub volume_constraint: f32,

    /// Whether `volume_constraint` should be honored downstream.
    pub use_volume_constraint: bool,

    /// Whether the enclosed region is a hole.
    pub as_hole: bool,
}

impl SurfaceMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            closed: true,
            marker: 1,
            volume_constraint: 100.0,
            use_volume_constraint: false,
            as_hole: false,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            ..Self::new()
        }
    }

    /// Create a mesh with `vertex_count` default vertices and `face_count`
    /// default faces, all selected.
    ///
    /// # Example
    ///
    /// ```
    /// use tessel_types::SurfaceMesh;
    ///
    /// let mesh = SurfaceMesh::zeroed(4, 2);
    /// assert_eq!(mesh.vertex_count(), 4);
    /// assert_eq!(mesh.face_count(), 2);
    /// ```
    #[must_use]
    pub fn zeroed(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); vertex_count],
            faces: vec![Face::default(); face_count],
            ..Self::new()
        }
    }

    /// Create a mesh from vertex and face tables.
    #[inline]
    #[must_use]
    pub fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            ..Self::new()
        }
    }

    /// Create a mesh from flat coordinate and index arrays.
    ///
    /// `positions` is `[x0, y0, z0, x1, y1, z1, ...]` and `indices` is
    /// `[a0, b0, c0, a1, b1, c1, ...]`. Returns an empty mesh if either
    /// array length is not divisible by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use tessel_types::SurfaceMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = SurfaceMesh::from_raw(&positions, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f32], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| Face::new([c[0], c[1], c[2]]))
            .collect();

        Self::from_parts(vertices, faces)
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Position of vertex `v`.
    #[inline]
    #[must_use]
    pub fn position(&self, v: u32) -> nalgebra::Point3<f32> {
        self.vertices[v as usize].position
    }

    /// Translate every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale every vertex componentwise about the origin.
    pub fn scale(&mut self, factors: Vector3<f32>) {
        for vertex in &mut self.vertices {
            vertex.position.x *= factors.x;
            vertex.position.y *= factors.y;
            vertex.position.z *= factors.z;
        }
    }

    /// Scale every vertex uniformly about the origin.
    pub fn scale_uniform(&mut self, factor: f32) {
        self.scale(Vector3::new(factor, factor, factor));
    }

    /// Compute the bounding box of the vertex table.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a unit cube from (0,0,0) to (1,1,1) as 12 triangles.
///
/// CCW winding viewed from outside; normals point outward.
///
/// # Example
///
/// ```
/// use tessel_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    // Bottom (z=0), top (z=1), front (y=0), back (y=1), left (x=0), right (x=1)
    let faces: [[u32; 3]; 12] = [
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
    for f in faces {
        mesh.faces.push(Face::new(f));
    }

    mesh
}
