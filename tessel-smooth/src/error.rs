//! Error types for smoothing operations.

use thiserror::Error;

/// Errors that can occur during smoothing.
#[derive(Debug, Error)]
pub enum SmoothError {
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

/// Result type for smoothing operations.
pub type SmoothResult<T> = std::result::Result<T, SmoothError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(format!("{}", SmoothError::EmptyMesh), "Mesh has no vertices");

        let wrapped: SmoothError = tessel_rings::RingsError::NoFaces.into();
        assert!(format!("{wrapped}").contains("Adjacency"));
    }
}
