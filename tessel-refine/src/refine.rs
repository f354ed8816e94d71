//! The 1→4 refinement pass.

#![allow(clippy::cast_possible_truncation)]

use tessel_rings::build_rings;
use tessel_types::{Face, SurfaceMesh, Vertex};
use tracing::{debug, info};

use crate::error::{RefineError, RefineResult};
use crate::result::RefineOutput;

/// Split every triangle into four at its edge midpoints.
///
/// Edges are enumerated once per vertex through the one-ring under the
/// convention "edge `(v, a)` belongs to `v` iff `v < a`", giving each
/// unique edge a dense index via per-vertex prefix offsets. Midpoint
/// vertices are appended in enumeration order; every original face is
/// replaced by its central triangle with the three corner triangles
/// appended behind all central ones.
///
/// Vertex markers and selection flags reset to their defaults on the
/// refined mesh; domain metadata is preserved.
///
/// # Errors
///
/// Returns an error for an empty mesh, a mesh whose adjacency cannot be
/// built, or a surface whose rings do not close around some edge.
pub fn refine(mesh: &mut SurfaceMesh) -> RefineResult<RefineOutput> {
    if mesh.vertices.is_empty() {
        return Err(RefineError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(RefineError::NoFaces);
    }

    let rings = build_rings(mesh)?;

    let original_vertices = mesh.vertex_count();
    let original_faces = mesh.face_count();

    // Count outgoing edges per vertex and assign prefix offsets.
    let mut edges_per_vertex = vec![0usize; original_vertices];
    let mut offsets = vec![0usize; original_vertices];
    let mut total_edges = 0usize;
    for n in 0..original_vertices {
        offsets[n] = total_edges;
        let mut local = 0usize;
        for entry in rings.ring(n as u32) {
            if (n as u32) < entry.a {
                local += 1;
                total_edges += 1;
            }
        }
        edges_per_vertex[n] = local;
    }

    debug!(edges = total_edges, "splitting edges at midpoints");

    // Append one midpoint vertex per edge, remembering the far endpoint.
    let mut vertices: Vec<Vertex> = mesh
        .vertices
        .iter()
        .map(|v| Vertex::new(v.position))
        .collect();
    vertices.reserve(total_edges);

    let mut edge_far_end = vec![0u32; total_edges];
    let mut edge_number = 0usize;
    for n in 0..original_vertices {
        let pn = mesh.vertices[n].position;
        for entry in rings.ring(n as u32) {
            if (n as u32) < entry.a {
                edge_far_end[edge_number] = entry.a;
                let pa = mesh.vertices[entry.a as usize].position;
                vertices.push(Vertex::from_coords(
                    0.5 * (pn.x + pa.x),
                    0.5 * (pn.y + pa.y),
                    0.5 * (pn.z + pa.z),
                ));
                edge_number += 1;
            }
        }
    }

    // Central triangles first, corner triangles behind them.
    let mut central = Vec::with_capacity(original_faces);
    let mut corners = Vec::with_capacity(3 * original_faces);

    for face in &mesh.faces {
        let v = face.v;
        let mut mid = [0u32; 3];
        for m in 0..3 {
            let lo = v[m].min(v[(m + 1) % 3]);
            let hi = v[m].max(v[(m + 1) % 3]);

            let base = offsets[lo as usize];
            let count = edges_per_vertex[lo as usize];
            let found = (0..count).find(|&k| edge_far_end[base + k] == hi);
            let Some(k) = found else {
                return Err(RefineError::OpenSurface { v0: lo, v1: hi });
            };
            mid[m] = (original_vertices + base + k) as u32;
        }

        central.push(Face::new(mid));
        for m in 0..3 {
            corners.push(Face::new([v[m], mid[m], mid[(m + 2) % 3]]));
        }
    }

    mesh.vertices = vertices;
    mesh.faces = central;
    mesh.faces.extend(corners);

    let output = RefineOutput {
        original_vertices,
        final_vertices: mesh.vertex_count(),
        original_faces,
        final_faces: mesh.face_count(),
        edges_split: total_edges,
    };
    info!(%output, "refinement finished");
    Ok(output)
}
