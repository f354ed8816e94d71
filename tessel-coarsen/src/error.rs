//! Error types for decimation.

use thiserror::Error;

/// Errors that can occur during decimation.
#[derive(Debug, Error)]
pub enum CoarsenError {
    /// Mesh has no vertices.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// Mesh has no faces.
    #[error("Mesh has no faces")]
    NoFaces,

    /// Adjacency could not be built.
    #[error("Adjacency construction failed: {0}")]
    Adjacency(#[from] tessel_rings::RingsError),
}

/// Result type for decimation operations.
pub type CoarsenResult<T> = std::result::Result<T, CoarsenError>;
