//! Two-phase ring construction.

use tessel_types::SurfaceMesh;
use tracing::{debug, warn};

use crate::error::{RingsError, RingsResult};
use crate::rings::{RingEntry, VertexRings};

/// Build the ordered one-ring adjacency of a mesh.
///
/// Phase one inserts, for each face `(a, b, c)` with index `k`, the
/// records `(b, c, k)`, `(c, a, k)` and `(a, b, k)` into the rings of
/// `a`, `b` and `c`. Vertices that receive no record are compacted out
/// of the mesh (faces rewritten) and the phase re-runs. Phase two orders
/// every ring counter-clockwise; a ring that cannot be closed deselects
/// its vertex and is reported, but never aborts the build.
///
/// Faces that repeat a vertex index are reported and still ingested; the
/// degenerate-edge guards of the geometric predicates filter them
/// downstream.
///
/// # Errors
///
/// Returns an error if the mesh has no vertices or no faces, or if a
/// face references a vertex outside the vertex table.
///
/// # Example
///
/// ```
/// use tessel_types::unit_cube;
/// use tessel_rings::build_rings;
///
/// let mut cube = unit_cube();
/// let rings = build_rings(&mut cube).unwrap();
///
/// // Each cube corner touches 4 or 5 triangles in this triangulation.
/// for v in 0..8 {
///     assert!(rings.degree(v) >= 4);
/// }
/// ```
pub fn build_rings(mesh: &mut SurfaceMesh) -> RingsResult<VertexRings> {
    if mesh.vertices.is_empty() {
        return Err(RingsError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(RingsError::NoFaces);
    }

    loop {
        let vertex_count = mesh.vertex_count();

        for (k, face) in mesh.faces.iter().enumerate() {
            for &index in &face.v {
                if index as usize >= vertex_count {
                    return Err(RingsError::FaceIndexOutOfRange {
                        face: k,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        let mut rings = VertexRings::with_vertex_count(vertex_count);
        let mut connected = vec![false; vertex_count];
        let mut connected_count = 0usize;

        for (k, face) in mesh.faces.iter().enumerate() {
            let [a, b, c] = face.v;
            if !face.is_well_formed() {
                warn!(face = k, indices = ?face.v, "face repeats a vertex index");
            }

            #[allow(clippy::cast_possible_truncation)]
            let k = k as u32;
            rings.push_entry(a, RingEntry::new(b, c, k));
            rings.push_entry(b, RingEntry::new(c, a, k));
            rings.push_entry(c, RingEntry::new(a, b, k));

            for v in [a, b, c] {
                if !connected[v as usize] {
                    connected[v as usize] = true;
                    connected_count += 1;
                }
            }
        }

        if connected_count < vertex_count {
            remove_unconnected(mesh, &connected);
            continue;
        }

        let mut open_rings = 0usize;
        for v in 0..vertex_count {
            #[allow(clippy::cast_possible_truncation)]
            let v = v as u32;
            if !rings.order_ring(v) {
                let p = mesh.position(v);
                warn!(
                    vertex = v,
                    x = p.x,
                    y = p.y,
                    z = p.z,
                    "one-ring does not close; vertex frozen"
                );
                mesh.vertices[v as usize].selected = false;
                open_rings += 1;
            }
        }

        debug!(
            vertices = vertex_count,
            faces = mesh.face_count(),
            open_rings,
            "ring adjacency built"
        );
        return Ok(rings);
    }
}

/// Compact away vertices that no face references, rewriting face indices.
///
/// Survivors shift down by the number of removed predecessors, so both
/// vertex order and face order are preserved.
fn remove_unconnected(mesh: &mut SurfaceMesh, connected: &[bool]) {
    let vertex_count = mesh.vertex_count();

    let mut map = vec![0u32; vertex_count];
    let mut removed = 0u32;
    for (i, &keep) in connected.iter().enumerate() {
        if keep {
            #[allow(clippy::cast_possible_truncation)]
            let shifted = i as u32 - removed;
            map[i] = shifted;
        } else {
            removed += 1;
        }
    }

    debug!(removed, "removing unconnected vertices");

    let mut write = 0usize;
    for read in 0..vertex_count {
        if connected[read] {
            mesh.vertices[write] = mesh.vertices[read];
            write += 1;
        }
    }
    mesh.vertices.truncate(write);

    for face in &mut mesh.faces {
        for v in &mut face.v {
            *v = map[*v as usize];
        }
    }
}
