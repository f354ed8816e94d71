//! The default optimization pipeline.

use tessel_coarsen::{coarsen_flat, CoarsenError};
use tessel_smooth::{smooth, SmoothError, SmoothParams};
use tessel_types::SurfaceMesh;
use thiserror::Error;
use tracing::info;

/// Errors from the combined optimization pipeline.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The decimation stage failed.
    #[error("Decimation failed: {0}")]
    Coarsen(#[from] CoarsenError),

    /// The smoothing stage failed.
    #[error("Smoothing failed: {0}")]
    Smooth(#[from] SmoothError),
}

/// Optimize a mesh with the default parameters: five passes of flat
/// decimation at rate 0.05, then up to fifteen smoothing iterations
/// toward the `[15, 150]` degree band without ridge preservation.
///
/// Returns whether the smoothing goal was reached.
///
/// # Errors
///
/// Returns an error if either stage rejects the mesh (empty, or
/// adjacency cannot be built).
///
/// # Example
///
/// ```
/// use tessel_types::unit_cube;
/// use tessel::optimize_default;
///
/// let mut mesh = unit_cube();
/// let reached = optimize_default(&mut mesh).unwrap();
/// assert!(reached);
/// ```
pub fn optimize_default(mesh: &mut SurfaceMesh) -> Result<bool, OptimizeError> {
    let coarsened = coarsen_flat(mesh, 0.05, 5)?;
    info!(%coarsened, "pipeline decimation stage done");

    let params = SmoothParams::with_angle_targets(15.0, 150.0)
        .with_iterations(15)
        .with_preserve_ridges(false);
    let smoothed = smooth(mesh, &params)?;
    info!(%smoothed, "pipeline smoothing stage done");

    Ok(smoothed.goal_reached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_types::unit_cube;

    #[test]
    fn pipeline_runs_on_cube() {
        let mut mesh = unit_cube();
        let reached = optimize_default(&mut mesh).unwrap();
        // Cube angles already satisfy the default band.
        assert!(reached);
        assert!(mesh.face_count() >= 4);
    }

    #[test]
    fn pipeline_rejects_empty_mesh() {
        let mut mesh = SurfaceMesh::new();
        assert!(matches!(
            optimize_default(&mut mesh),
            Err(OptimizeError::Coarsen(_))
        ));
    }
}
