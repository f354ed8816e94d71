//! API regression tests for the Tessel workspace.
//!
//! Scenario coverage across the crates, in increasing complexity:
//!
//! - Tier 1: types and adjacency invariants
//! - Tier 2: smoothing (relocation + flipping) on closed meshes
//! - Tier 3: decimation and refinement counts
//! - Tier 4: tolerance of malformed input, default pipeline

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use tessel::prelude::*;
use tessel::types::Vector3;

fn tetrahedron() -> SurfaceMesh {
    let positions = [
        1.0, 1.0, 1.0, 1.0, -1.0, -1.0, //
        -1.0, 1.0, -1.0, -1.0, -1.0, 1.0,
    ];
    let indices = [0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];
    SurfaceMesh::from_raw(&positions, &indices)
}

/// A rectangular grid in the z = 0 plane, `cols` x `rows` vertices.
fn flat_grid(cols: u32, rows: u32) -> SurfaceMesh {
    let mut positions = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            positions.extend([c as f32, r as f32, 0.0]);
        }
    }
    let mut indices = Vec::new();
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let v00 = r * cols + c;
            let v10 = v00 + 1;
            let v01 = v00 + cols;
            let v11 = v01 + 1;
            indices.extend([v00, v10, v11, v00, v11, v01]);
        }
    }
    SurfaceMesh::from_raw(&positions, &indices)
}

/// Two unit-square planes meeting at 90 degrees along the middle column,
/// `rows` vertices long.
fn ridge_strip(rows: u32) -> SurfaceMesh {
    let mut positions = Vec::new();
    for r in 0..rows {
        for c in 0..3 {
            let x = c as f32 - 1.0;
            positions.extend([x, r as f32, 1.0 - x.abs()]);
        }
    }
    let mut indices = Vec::new();
    for r in 0..rows - 1 {
        for c in 0..2 {
            let v00 = r * 3 + c;
            let v10 = v00 + 1;
            let v01 = v00 + 3;
            let v11 = v01 + 1;
            indices.extend([v00, v10, v11, v00, v11, v01]);
        }
    }
    SurfaceMesh::from_raw(&positions, &indices)
}

fn has_edge(mesh: &SurfaceMesh, a: u32, b: u32) -> bool {
    mesh.faces
        .iter()
        .any(|f| f.v.contains(&a) && f.v.contains(&b))
}

// =============================================================================
// TIER 1: Types and adjacency invariants
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn tetrahedron_rings_have_length_three() {
        let mut mesh = tetrahedron();
        let rings = build_rings(&mut mesh).unwrap();
        for v in 0..4 {
            assert_eq!(rings.degree(v), 3);
        }
        assert_eq!(rings.total_entries(), 3 * mesh.face_count());
    }

    #[test]
    fn every_face_appears_once_per_corner_ring() {
        let mut mesh = tessel::types::unit_cube();
        let rings = build_rings(&mut mesh).unwrap();
        for (k, face) in mesh.faces.iter().enumerate() {
            for &corner in &face.v {
                let hits = rings
                    .ring(corner)
                    .iter()
                    .filter(|e| e.face as usize == k)
                    .count();
                assert_eq!(hits, 1);
            }
        }
    }

    #[test]
    fn translate_round_trip_is_identity() {
        let mut mesh = tetrahedron();
        let reference = mesh.clone();
        let offset = Vector3::new(0.5, -1.25, 3.0);
        mesh.translate(offset);
        mesh.translate(-offset);
        for (a, b) in mesh.vertices.iter().zip(reference.vertices.iter()) {
            assert!((a.position - b.position).norm() < 1e-5);
        }
    }

    #[test]
    fn scale_round_trip_is_identity() {
        let mut mesh = tetrahedron();
        let reference = mesh.clone();
        mesh.scale(Vector3::new(2.0, 5.0, 0.25));
        mesh.scale(Vector3::new(0.5, 0.2, 4.0));
        for (a, b) in mesh.vertices.iter().zip(reference.vertices.iter()) {
            assert!((a.position - b.position).norm() < 1e-5);
        }
    }

    #[test]
    fn grid_boundary_is_frozen_interior_selected() {
        let mut mesh = flat_grid(5, 5);
        build_rings(&mut mesh).unwrap();

        for (i, vertex) in mesh.vertices.iter().enumerate() {
            let (c, r) = (i as u32 % 5, i as u32 / 5);
            let boundary = c == 0 || c == 4 || r == 0 || r == 4;
            assert_eq!(vertex.selected, !boundary, "vertex {i}");
        }
    }
}

// =============================================================================
// TIER 2: Smoothing
// =============================================================================

mod tier2_smoothing {
    use super::*;

    #[test]
    fn one_iteration_keeps_tetrahedron_counts() {
        let mut mesh = tetrahedron();
        let params = SmoothParams::with_angle_targets(80.0, 100.0).with_iterations(1);
        let result = smooth(&mut mesh, &params).unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
    }

    #[test]
    fn goal_or_bound_always_holds() {
        let mut mesh = tetrahedron();
        let params = SmoothParams::with_angle_targets(15.0, 150.0).with_iterations(7);
        let result = smooth(&mut mesh, &params).unwrap();

        if result.goal_reached {
            assert!(result.final_angles.within(15.0, 150.0));
        } else {
            assert_eq!(result.iterations, 7);
        }
    }

    #[test]
    fn ridge_edges_survive_ridge_preserving_smooth() {
        let mut mesh = ridge_strip(4);
        // Ridge runs along column 1: vertices 1, 4, 7, 10.
        let params = SmoothParams::with_angle_targets(50.0, 70.0)
            .with_iterations(3)
            .with_preserve_ridges(true);
        smooth(&mut mesh, &params).unwrap();

        assert!(has_edge(&mesh, 1, 4));
        assert!(has_edge(&mesh, 4, 7));
        assert!(has_edge(&mesh, 7, 10));
    }

    #[test]
    fn smooth_normals_completes_on_closed_mesh() {
        let mut mesh = tessel::types::unit_cube();
        let stats = smooth_normals(&mut mesh, 15.0, 150.0).unwrap();
        assert!(stats.min > 0.0);
        assert_eq!(mesh.face_count(), 12);
    }
}

// =============================================================================
// TIER 3: Decimation and refinement
// =============================================================================

mod tier3_topology {
    use super::*;

    #[test]
    fn cube_refines_to_26_and_48() {
        let mut mesh = tessel::types::unit_cube();
        let result = refine(&mut mesh).unwrap();
        assert_eq!(result.final_vertices, 26);
        assert_eq!(result.final_faces, 48);

        let rings = build_rings(&mut mesh).unwrap();
        assert_eq!(rings.total_entries(), 3 * 48);
    }

    #[test]
    fn flat_grid_loses_interior_keeps_boundary() {
        let mut mesh = flat_grid(5, 5);
        let result = coarsen_flat(&mut mesh, 0.05, 8).unwrap();

        assert!(result.vertices_removed >= 1, "{result}");
        assert!(mesh.vertex_count() < 25);
        assert!(mesh.vertex_count() >= 16);

        // All 16 boundary vertices survive in place.
        for c in [0.0f32, 4.0] {
            for r in 0..5 {
                let r = r as f32;
                assert!(mesh
                    .vertices
                    .iter()
                    .any(|v| (v.position.x - c).abs() < 1e-6 && (v.position.y - r).abs() < 1e-6));
            }
        }
        // And the surface stays planar.
        assert!(mesh.vertices.iter().all(|v| v.position.z.abs() < 1e-5));
    }

    #[test]
    fn refined_then_coarsened_cube_is_consistent() {
        let mut mesh = tessel::types::unit_cube();
        refine(&mut mesh).unwrap();
        let after_refine = mesh.vertex_count();

        // The refined cube has flat face interiors to give back.
        let result = coarsen_flat(&mut mesh, 0.05, 4).unwrap();
        assert!(result.vertices_removed >= 1, "{result}");
        assert!(mesh.vertex_count() < after_refine);

        let rings = build_rings(&mut mesh).unwrap();
        assert_eq!(rings.total_entries(), 3 * mesh.face_count());
    }

    #[test]
    fn uniform_mesh_resists_dense_coarsening() {
        let mut mesh = tessel::types::unit_cube();
        refine(&mut mesh).unwrap();
        // After refinement every region is still uniform enough that the
        // denseness ratio stays at 1.
        let result = coarsen(&mut mesh, &CoarsenParams::dense(0.9)).unwrap();
        assert_eq!(result.vertices_removed, 0);
    }
}

// =============================================================================
// TIER 4: Malformed input and the default pipeline
// =============================================================================

mod tier4_pipeline {
    use super::*;

    #[test]
    fn degenerate_face_does_not_abort_global_ops() {
        // Face 0 repeats a vertex; construction reports it and the
        // passes keep going.
        let positions = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 1.0, 1.0, 0.0,
        ];
        let indices = [0, 0, 1, 0, 1, 2, 1, 3, 2];
        let mut mesh = SurfaceMesh::from_raw(&positions, &indices);

        let params = SmoothParams::with_angle_targets(15.0, 150.0).with_iterations(1);
        let result = smooth(&mut mesh, &params);
        assert!(result.is_ok());
        assert_eq!(mesh.face_count(), 3);
    }

    #[test]
    fn default_pipeline_runs_end_to_end() {
        let mut mesh = tessel::types::unit_cube();
        refine(&mut mesh).unwrap();
        optimize_default(&mut mesh).unwrap();
        assert!(mesh.face_count() > 0);
        assert_eq!(
            build_rings(&mut mesh).unwrap().total_entries(),
            3 * mesh.face_count()
        );
    }
}
