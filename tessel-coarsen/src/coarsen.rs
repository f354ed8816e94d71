//! The decimation pass: eligibility, removal, compaction.

#![allow(clippy::cast_possible_truncation)]

use rayon::prelude::*;
use tessel_geometry::tensor_basis;
use tessel_rings::{build_rings, VertexRings};
use tessel_smooth::relocate_vertex;
use tessel_types::SurfaceMesh;
use tracing::{debug, info, warn};

use crate::error::{CoarsenError, CoarsenResult};
use crate::params::CoarsenParams;
use crate::polygon::{subdivide_polygon, PolygonNode, SlotPool};
use crate::result::CoarsenOutput;

/// Face-slot sentinel for retired faces awaiting compaction.
const INVALID_INDEX: u32 = u32::MAX;

/// Run one decimation pass over the mesh.
///
/// # Errors
///
/// Returns an error if the mesh is empty or its adjacency cannot be
/// built. A degenerate structure tensor mid-pass does not error: the
/// pass halts, committed removals are compacted, and the outcome carries
/// `halted = true`.
///
/// # Example
///
/// ```
/// use tessel_types::unit_cube;
/// use tessel_coarsen::{coarsen, CoarsenParams};
///
/// let mut cube = unit_cube();
/// let result = coarsen(&mut cube, &CoarsenParams::dense(0.9)).unwrap();
/// assert_eq!(result.final_faces, cube.face_count());
/// ```
pub fn coarsen(mesh: &mut SurfaceMesh, params: &CoarsenParams) -> CoarsenResult<CoarsenOutput> {
    validate(mesh)?;
    let mut rings = build_rings(mesh)?;
    Ok(coarsen_pass(mesh, &mut rings, params))
}

/// Density-driven decimation: up to `iterations` passes with the
/// [`CoarsenParams::dense`] preset, stopping when a pass removes nothing.
///
/// # Errors
///
/// Returns an error if the mesh is empty or its adjacency cannot be
/// built.
pub fn coarsen_dense(
    mesh: &mut SurfaceMesh,
    rate: f32,
    iterations: u32,
) -> CoarsenResult<CoarsenOutput> {
    run_passes(mesh, &CoarsenParams::dense(rate), iterations)
}

/// Flatness-driven decimation: up to `iterations` passes with the
/// [`CoarsenParams::flat`] preset, stopping when a pass removes nothing.
///
/// # Errors
///
/// Returns an error if the mesh is empty or its adjacency cannot be
/// built.
pub fn coarsen_flat(
    mesh: &mut SurfaceMesh,
    rate: f32,
    iterations: u32,
) -> CoarsenResult<CoarsenOutput> {
    run_passes(mesh, &CoarsenParams::flat(rate), iterations)
}

fn validate(mesh: &SurfaceMesh) -> CoarsenResult<()> {
    if mesh.vertices.is_empty() {
        return Err(CoarsenError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(CoarsenError::NoFaces);
    }
    Ok(())
}

fn run_passes(
    mesh: &mut SurfaceMesh,
    params: &CoarsenParams,
    iterations: u32,
) -> CoarsenResult<CoarsenOutput> {
    validate(mesh)?;
    let mut rings = build_rings(mesh)?;

    let original_vertices = mesh.vertex_count();
    let original_faces = mesh.face_count();
    let mut vertices_removed = 0;
    let mut halted = false;

    for pass in 1..=iterations {
        let outcome = coarsen_pass(mesh, &mut rings, params);
        vertices_removed += outcome.vertices_removed;
        halted = outcome.halted;
        debug!(pass, removed = outcome.vertices_removed, "decimation pass complete");
        if outcome.halted || outcome.vertices_removed == 0 {
            break;
        }
    }

    let output = CoarsenOutput {
        original_vertices,
        final_vertices: mesh.vertex_count(),
        original_faces,
        final_faces: mesh.face_count(),
        vertices_removed,
        halted,
    };
    info!(%output, "decimation finished");
    Ok(output)
}

/// One pass over a mesh whose rings are already built. Keeps the rings
/// valid (detached, re-ordered, and remapped through compaction) so the
/// multi-pass wrappers can reuse them.
fn coarsen_pass(
    mesh: &mut SurfaceMesh,
    rings: &mut VertexRings,
    params: &CoarsenParams,
) -> CoarsenOutput {
    let original_vertices = mesh.vertex_count();
    let original_faces = mesh.face_count();

    // Eligibility snapshot: every ring neighbor must keep degree > 3
    // after the removal, and may share at most two ring vertices with
    // the candidate (more would pinch the hole into a non-manifold).
    let eligible: Vec<bool> = (0..original_vertices)
        .into_par_iter()
        .map(|n| {
            let v = n as u32;
            if !mesh.vertices[n].selected {
                return false;
            }
            let ring = rings.ring(v);
            if ring.is_empty() {
                return false;
            }
            for entry in ring {
                if rings.degree(entry.a) <= 3 {
                    return false;
                }
                let shared = rings
                    .ring(entry.a)
                    .iter()
                    .filter(|other| ring.iter().any(|own| own.a == other.a))
                    .count();
                if shared > 2 {
                    return false;
                }
            }
            true
        })
        .collect();

    let mut removed = vec![false; original_vertices];
    let mut vertices_removed = 0;
    let mut halted = false;

    for n in 0..original_vertices as u32 {
        if !eligible[n as usize] || rings.ring(n).is_empty() {
            continue;
        }

        let needs_tensor = params.flatness_rate > 0.0 || params.max_normal_angle > 0.0;

        let mut denseness = 1.0f32;
        if params.denseness_weight > 0.0 {
            let p = mesh.position(n);
            let mut max_incident = -1.0f32;
            let mut local_average = -1.0f32;
            for entry in rings.ring(n) {
                let pa = mesh.position(entry.a);
                let pb = mesh.position(entry.b);
                let to_a = (p - pa).norm();
                let to_b = (p - pb).norm();
                let rim = (pa - pb).norm();
                max_incident = max_incident.max(to_a).max(to_b);
                local_average = local_average.max((to_a + to_b + rim) / 3.0);
            }
            if local_average > 0.0 {
                denseness = (max_incident / local_average).powf(params.denseness_weight);
            }
        }

        let mut flatness = 1.0f32;
        let mut alignment = f32::INFINITY;
        if needs_tensor {
            let basis = tensor_basis(mesh, rings, n, params.tensor_radius);
            alignment = basis.min_alignment;
            if params.flatness_rate > 0.0 {
                if basis.values[0] == 0.0 {
                    warn!(vertex = n, "zero dominant eigenvalue, decimation halted");
                    halted = true;
                    break;
                }
                flatness = (basis.values[1] / basis.values[0])
                    .abs()
                    .powf(params.flatness_rate);
            }
        }

        let mut remove = flatness * denseness < params.coarseness_rate;
        if params.max_normal_angle > 0.0 {
            remove = remove && alignment > params.max_normal_angle;
        }

        if remove {
            remove_vertex(mesh, rings, n, params);
            removed[n as usize] = true;
            vertices_removed += 1;
        }
    }

    compact(mesh, rings, &removed);

    CoarsenOutput {
        original_vertices,
        final_vertices: mesh.vertex_count(),
        original_faces,
        final_faces: mesh.face_count(),
        vertices_removed,
        halted,
    }
}

/// Remove vertex `n`: retire its faces, detach it from every neighbor
/// ring, retriangulate the hole over the freed face slots, then restore
/// ring order and relocate the surviving neighbors.
fn remove_vertex(mesh: &mut SurfaceMesh, rings: &mut VertexRings, n: u32, params: &CoarsenParams) {
    let ring = rings.take_ring(n);

    let mut slots = Vec::with_capacity(ring.len());
    let mut marker = 0;
    for entry in &ring {
        slots.push(entry.face);
        marker = mesh.faces[entry.face as usize].marker;

        let face = &mut mesh.faces[entry.face as usize];
        face.v = [INVALID_INDEX; 3];
        face.marker = -1;

        rings
            .ring_mut(entry.a)
            .retain(|record| record.a != n && record.b != n);
    }

    // Hole boundary in ring order, carrying post-detach degrees for the
    // minimum-valence splitting.
    let hole: Vec<PolygonNode> = ring
        .iter()
        .map(|entry| PolygonNode {
            vertex: entry.a,
            degree: rings.degree(entry.a) as u32,
        })
        .collect();

    let mut pool = SlotPool::new(slots);
    subdivide_polygon(hole, &mut pool, marker, mesh, rings);
    debug!(
        vertex = n,
        faces = pool.consumed(),
        "hole retriangulated"
    );

    for entry in &ring {
        if !rings.order_ring(entry.a) {
            warn!(vertex = entry.a, "ring not closed after retriangulation");
        }
    }

    for entry in &ring {
        if mesh.vertices[entry.a as usize].selected {
            relocate_vertex(mesh, rings, entry.a, params.tensor_radius);
        }
    }
}

/// Drop removed vertices and retired faces, rewriting every surviving
/// index (faces and ring records) through the compaction maps.
fn compact(mesh: &mut SurfaceMesh, rings: &mut VertexRings, removed: &[bool]) {
    let old_vertex_count = mesh.vertex_count();
    let mut vertex_map: Vec<Option<u32>> = vec![None; old_vertex_count];
    let mut write = 0usize;
    for read in 0..old_vertex_count {
        if !removed[read] {
            vertex_map[read] = Some(write as u32);
            mesh.vertices[write] = mesh.vertices[read];
            write += 1;
        }
    }
    mesh.vertices.truncate(write);
    rings.compact(&vertex_map);

    let old_face_count = mesh.face_count();
    let mut face_map: Vec<Option<u32>> = vec![None; old_face_count];
    let mut face_write = 0usize;
    for read in 0..old_face_count {
        let face = mesh.faces[read];
        if face.v[0] == INVALID_INDEX {
            continue;
        }
        let mapped = (
            vertex_map[face.v[0] as usize],
            vertex_map[face.v[1] as usize],
            vertex_map[face.v[2] as usize],
        );
        if let (Some(a), Some(b), Some(c)) = mapped {
            mesh.faces[face_write] = tessel_types::Face {
                v: [a, b, c],
                ..face
            };
            face_map[read] = Some(face_write as u32);
            face_write += 1;
        }
    }
    mesh.faces.truncate(face_write);

    rings.remap(&vertex_map, &face_map);
}
