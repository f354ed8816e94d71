//! Result types for refinement.

/// Outcome of a refinement run.
#[derive(Debug, Clone, Copy)]
pub struct RefineOutput {
    /// Vertices before refinement.
    pub original_vertices: usize,

    /// Vertices after refinement (`original + unique edges`).
    pub final_vertices: usize,

    /// Faces before refinement.
    pub original_faces: usize,

    /// Faces after refinement (`4 * original`).
    pub final_faces: usize,

    /// Number of unique edges split at their midpoint.
    pub edges_split: usize,
}

impl std::fmt::Display for RefineOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Refine: {} -> {} vertices, {} -> {} faces, {} edges split",
            self.original_vertices,
            self.final_vertices,
            self.original_faces,
            self.final_faces,
            self.edges_split
        )
    }
}
