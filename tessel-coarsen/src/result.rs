//! Result types for decimation.

/// Outcome of a decimation run.
#[derive(Debug, Clone, Copy)]
pub struct CoarsenOutput {
    /// Vertices before decimation.
    pub original_vertices: usize,

    /// Vertices after compaction.
    pub final_vertices: usize,

    /// Faces before decimation.
    pub original_faces: usize,

    /// Faces after compaction.
    pub final_faces: usize,

    /// Vertices removed across all passes.
    pub vertices_removed: usize,

    /// Whether the run halted early on a degenerate structure tensor.
    pub halted: bool,
}

impl CoarsenOutput {
    /// Fraction of vertices removed, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduction_ratio(&self) -> f32 {
        if self.original_vertices == 0 {
            0.0
        } else {
            (self.original_vertices - self.final_vertices) as f32 / self.original_vertices as f32
        }
    }
}

impl std::fmt::Display for CoarsenOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coarsen: {} -> {} vertices, {} -> {} faces ({:.1}% reduction{})",
            self.original_vertices,
            self.final_vertices,
            self.original_faces,
            self.final_faces,
            self.reduction_ratio() * 100.0,
            if self.halted { ", halted" } else { "" }
        )
    }
}
