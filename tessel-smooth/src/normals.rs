//! Feature-aware normal smoothing.

use nalgebra::{Point3, Vector3};
use tessel_geometry::{corner_normal, normalized_or_zero, rotate_about_axis};
use tessel_rings::VertexRings;
use tessel_types::SurfaceMesh;
use tracing::warn;

/// One normal-smoothing step for vertex `v`.
///
/// For every ring corner `(b, c)` the vertex is rotated about the edge
/// `(b, c)` so that the corner's face normal tilts toward the average of
/// the neighboring face normals that already agree with it in sign; the
/// final position is the mean of the per-corner rotations. A vertex with
/// any deselected ring neighbor is left untouched.
pub(crate) fn smooth_vertex_normal(mesh: &mut SurfaceMesh, rings: &VertexRings, v: u32) {
    let ring = rings.ring(v);
    let len = ring.len();
    if len == 0 {
        return;
    }

    let mut accum = Vector3::zeros();
    let mut count = 0u32;

    for i in 0..len {
        let a = ring[i].a;
        let b = ring[i].b;
        let c = ring[(i + 1) % len].b;
        let d = ring[(i + 2) % len].b;

        if !mesh.vertices[b as usize].selected {
            return;
        }

        // The vertex opposite v across the outer edge (b, c).
        let outer = rings
            .ring(b)
            .iter()
            .find(|e| (e.a == c && e.b != v) || (e.b == c && e.a != v))
            .map(|e| if e.a == c { e.b } else { e.a });
        let Some(e) = outer else {
            warn!(vertex = v, neighbor = b, "normal smoothing: outer corner not found");
            continue;
        };

        let g = corner_normal(mesh, v, b, c);

        // Tilt direction: neighbor face normals that agree with g.
        let mut tilt = Vector3::zeros();
        let mut aligned = 0u32;
        for n in [
            corner_normal(mesh, v, a, b),
            corner_normal(mesh, v, c, d),
            corner_normal(mesh, b, e, c),
        ] {
            let along = n.dot(&g);
            if along > 0.0 {
                aligned += 1;
                tilt += along * n;
            }
        }

        let tilt = normalized_or_zero(tilt);
        if tilt == Vector3::zeros() {
            continue;
        }

        let pb = mesh.position(b);
        let pc = mesh.position(c);
        let edge = pb - pc;
        let in_plane = g.cross(&tilt);

        let flat = (edge.x * edge.x + edge.y * edge.y).sqrt();
        let (theta, phi) = if in_plane.dot(&edge) >= 0.0 {
            (edge.y.atan2(edge.x), edge.z.atan2(flat))
        } else {
            ((-edge.y).atan2(-edge.x), (-edge.z).atan2(flat))
        };

        #[allow(clippy::cast_precision_loss)]
        let alpha = tilt.dot(&g).clamp(-1.0, 1.0).acos() / (4 - aligned) as f32;
        let rotated = rotate_about_axis(mesh.position(v) - pc, theta, phi, alpha);

        accum += rotated + pc.coords;
        count += 1;
    }

    if count > 0 && accum.iter().all(|x| x.is_finite()) {
        #[allow(clippy::cast_precision_loss)]
        let averaged = accum / count as f32;
        mesh.vertices[v as usize].position = Point3::from(averaged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_rings::build_rings;

    fn octahedron() -> SurfaceMesh {
        let positions = [
            1.0, 0.0, 0.0, -1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, -1.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, -1.0,
        ];
        let indices = [
            0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4, //
            2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
        ];
        SurfaceMesh::from_raw(&positions, &indices)
    }

    #[test]
    fn symmetric_vertex_stays_near_axis() {
        let mut mesh = octahedron();
        let rings = build_rings(&mut mesh).unwrap();
        smooth_vertex_normal(&mut mesh, &rings, 4);

        let p = mesh.position(4);
        // The pole is a symmetry axis: smoothing may pull it toward the
        // surface but not sideways.
        assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4, "pole drifted: {p:?}");
        assert!(p.z > 0.5);
    }

    #[test]
    fn frozen_neighbor_freezes_vertex() {
        let mut mesh = octahedron();
        let rings = build_rings(&mut mesh).unwrap();
        mesh.vertices[0].selected = false;

        let before = mesh.position(4);
        smooth_vertex_normal(&mut mesh, &rings, 4);
        assert_eq!(mesh.position(4), before);
    }

    #[test]
    fn empty_ring_is_noop() {
        let mut mesh = octahedron();
        let mut rings = build_rings(&mut mesh).unwrap();
        rings.take_ring(4);
        let before = mesh.position(4);
        smooth_vertex_normal(&mut mesh, &rings, 4);
        assert_eq!(mesh.position(4), before);
    }
}
