//! Error types for refinement.

use thiserror::Error;

/// Errors that can occur during refinement.
#[derive(Debug, Error)]
pub enum RefineError {
    /// Mesh has no vertices.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// Mesh has no faces.
    #[error("Mesh has no faces")]
    NoFaces,

    /// Adjacency could not be built.
    #[error("Adjacency construction failed: {0}")]
    Adjacency(#[from] tessel_rings::RingsError),

    /// A face edge was missing from the edge enumeration; the surface is
    /// not closed around it.
    #[error("Edge ({v0}, {v1}) is not closed; refinement requires closed rings")]
    OpenSurface {
        /// Lower vertex index of the edge.
        v0: u32,
        /// Upper vertex index of the edge.
        v1: u32,
    },
}

/// Result type for refinement operations.
pub type RefineResult<T> = std::result::Result<T, RefineError>;
