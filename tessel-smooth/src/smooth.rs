//! The smoothing driver loop.

#![allow(clippy::cast_possible_truncation)]

use tessel_geometry::{angle_stats, AngleStats};
use tessel_rings::build_rings;
use tessel_types::SurfaceMesh;
use tracing::{debug, info};

use crate::error::{SmoothError, SmoothResult};
use crate::flip::flip_vertex_edges;
use crate::normals::smooth_vertex_normal;
use crate::params::SmoothParams;
use crate::relocate::relocate_vertex;
use crate::result::SmoothOutput;

/// Smooth the mesh until every interior angle lies inside the target
/// band or the iteration bound is reached.
///
/// Each iteration visits the selected vertices in index order, relocating
/// the vertex along the surface and then flipping its outgoing edges.
/// Later vertices observe the state produced by earlier ones within the
/// same iteration.
///
/// # Errors
///
/// Returns an error if the mesh is empty or its adjacency cannot be
/// built.
///
/// # Example
///
/// ```
/// use tessel_types::unit_cube;
/// use tessel_smooth::{smooth, SmoothParams};
///
/// let mut cube = unit_cube();
/// // The cube's angles already sit inside [15, 150] degrees.
/// let result = smooth(&mut cube, &SmoothParams::new()).unwrap();
/// assert!(result.goal_reached);
/// assert_eq!(result.iterations, 0);
/// ```
pub fn smooth(mesh: &mut SurfaceMesh, params: &SmoothParams) -> SmoothResult<SmoothOutput> {
    if mesh.vertices.is_empty() {
        return Err(SmoothError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(SmoothError::NoFaces);
    }

    let mut rings = build_rings(mesh)?;

    let initial_angles = angle_stats(mesh, params.min_angle, params.max_angle);
    debug!(angles = %initial_angles, "smoothing start");

    let mut stats = initial_angles;
    let mut smoothed = stats.within(params.min_angle, params.max_angle);
    let mut iterations = 0;

    while !smoothed && iterations < params.iterations {
        iterations += 1;

        for v in 0..mesh.vertex_count() as u32 {
            if !mesh.vertices[v as usize].selected || rings.ring(v).is_empty() {
                continue;
            }
            relocate_vertex(mesh, &rings, v, params.tensor_radius);
            flip_vertex_edges(mesh, &mut rings, v, params.preserve_ridges);
        }

        stats = angle_stats(mesh, params.min_angle, params.max_angle);
        debug!(iteration = iterations, angles = %stats, "smoothing pass");
        smoothed = stats.within(params.min_angle, params.max_angle);
    }

    let output = SmoothOutput {
        goal_reached: smoothed,
        iterations,
        initial_angles,
        final_angles: stats,
    };
    info!(%output, "surface smoothing finished");
    Ok(output)
}

/// One normal-smoothing pass over all selected vertices.
///
/// Returns the angle distribution afterwards, with `min_angle` /
/// `max_angle` (degrees) as the histogram thresholds.
///
/// # Errors
///
/// Returns an error if the mesh is empty or its adjacency cannot be
/// built.
pub fn smooth_normals(
    mesh: &mut SurfaceMesh,
    min_angle: f32,
    max_angle: f32,
) -> SmoothResult<AngleStats> {
    if mesh.vertices.is_empty() {
        return Err(SmoothError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(SmoothError::NoFaces);
    }

    let rings = build_rings(mesh)?;

    for v in 0..mesh.vertex_count() as u32 {
        if !mesh.vertices[v as usize].selected {
            continue;
        }
        smooth_vertex_normal(mesh, &rings, v);
    }

    let stats = angle_stats(mesh, min_angle, max_angle);
    info!(angles = %stats, "normal smoothing finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> SurfaceMesh {
        let positions = [
            1.0, 1.0, 1.0, 1.0, -1.0, -1.0, //
            -1.0, 1.0, -1.0, -1.0, -1.0, 1.0,
        ];
        let indices = [0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];
        SurfaceMesh::from_raw(&positions, &indices)
    }

    #[test]
    fn empty_mesh_rejected() {
        let mut mesh = SurfaceMesh::new();
        assert!(matches!(
            smooth(&mut mesh, &SmoothParams::new()),
            Err(SmoothError::EmptyMesh)
        ));
        assert!(matches!(
            smooth_normals(&mut mesh, 15.0, 150.0),
            Err(SmoothError::EmptyMesh)
        ));
    }

    #[test]
    fn tetrahedron_counts_survive_smoothing() {
        let mut mesh = tetrahedron();
        let params = SmoothParams::with_angle_targets(59.0, 61.0).with_iterations(1);
        let result = smooth(&mut mesh, &params).unwrap();

        // Equilateral faces: the goal already holds, nothing iterates.
        assert!(result.goal_reached);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn one_iteration_preserves_topology() {
        let mut mesh = tetrahedron();
        // Impossible band: exactly one iteration runs.
        let params = SmoothParams::with_angle_targets(89.0, 91.0).with_iterations(1);
        let result = smooth(&mut mesh, &params).unwrap();

        assert!(!result.goal_reached);
        assert_eq!(result.iterations, 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn smoothing_improves_perturbed_octahedron() {
        let positions = [
            1.3, 0.2, 0.1, -1.0, 0.0, 0.0, //
            0.1, 0.9, -0.2, 0.0, -1.1, 0.0, //
            0.0, 0.1, 1.2, 0.0, 0.0, -0.9,
        ];
        let indices = [
            0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4, //
            2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
        ];
        let mut mesh = SurfaceMesh::from_raw(&positions, &indices);

        let params = SmoothParams::with_angle_targets(25.0, 120.0).with_iterations(10);
        let result = smooth(&mut mesh, &params).unwrap();

        assert!(result.iterations >= 1);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 8);
        assert!(result.final_angles.min > 5.0, "{result}");
    }

    #[test]
    fn smooth_normals_returns_stats() {
        let mut mesh = tetrahedron();
        let stats = smooth_normals(&mut mesh, 15.0, 150.0).unwrap();
        assert!(stats.min > 15.0);
        assert!(stats.max < 150.0);
    }
}
