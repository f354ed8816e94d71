//! Error types for ring construction.

use thiserror::Error;

/// Errors that can occur while building one-ring adjacency.
#[derive(Debug, Error)]
pub enum RingsError {
    /// Mesh has no vertices.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// Mesh has no faces.
    #[error("Mesh has no faces")]
    NoFaces,

    /// A face references a vertex index outside the vertex table.
    #[error("Face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        /// Offending face index.
        face: usize,
        /// Out-of-range vertex index.
        index: u32,
        /// Size of the vertex table.
        vertex_count: usize,
    },
}

/// Result type for ring operations.
pub type RingsResult<T> = std::result::Result<T, RingsError>;
