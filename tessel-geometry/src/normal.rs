//! Sign-consistent vertex normals.

use nalgebra::Vector3;
use tessel_rings::VertexRings;
use tessel_types::SurfaceMesh;

use crate::kernel::{normalized_or_zero, unit_toward};

/// Unit normal at vertex `v`: the sign-consistent average of the corner
/// normals around `v`'s one-ring.
///
/// Each ring record `(a, b, _)` contributes
/// `g = normalize(hat(v,a) × hat(v,b))`, flipped when it opposes the
/// running average, so folds in the ring cannot cancel the sum. Returns
/// the zero vector for an empty ring.
#[must_use]
pub fn vertex_normal(mesh: &SurfaceMesh, rings: &VertexRings, v: u32) -> Vector3<f32> {
    let mut normal = Vector3::zeros();
    let ring = rings.ring(v);

    for entry in ring {
        let toward_a = unit_toward(mesh, v, entry.a);
        let toward_b = unit_toward(mesh, v, entry.b);
        let mut g = normalized_or_zero(toward_a.cross(&toward_b));

        if normal.dot(&g) < 0.0 {
            g = -g;
        }
        normal += g;
    }

    if ring.is_empty() {
        Vector3::zeros()
    } else {
        #[allow(clippy::cast_precision_loss)]
        let averaged = normal / ring.len() as f32;
        normalized_or_zero(averaged)
    }
}
