//! Surface-constrained vertex relocation.

use nalgebra::{Point3, Vector3};
use tessel_geometry::{corner_cosine, project_to_corner_plane, tensor_basis};
use tessel_rings::VertexRings;
use tessel_types::SurfaceMesh;

/// Move vertex `v` toward the weighted average of its tangent-space
/// targets, damped along the local eigen-basis.
///
/// Every consecutive record pair `(a, apex)`, `(apex, c)` in the ring
/// contributes the projection of `v` onto the tangent plane at `apex`
/// with arms `(a, c)`, weighted by `1 + cos` of that corner. The move
/// toward the average is then decomposed in the structure-tensor basis
/// and each component divided by `1 + eigenvalue`: the dominant (normal)
/// direction barely moves while the tangent directions glide freely.
///
/// When the basis is degenerate (a zero axis, as on perfectly flat
/// neighborhoods) the vertex jumps straight to the tangent target.
/// Vertices with empty rings are left alone.
pub fn relocate_vertex(mesh: &mut SurfaceMesh, rings: &VertexRings, v: u32, tensor_radius: u32) {
    let ring = rings.ring(v);
    if ring.is_empty() {
        return;
    }

    let p = mesh.position(v);
    let mut sum = Vector3::zeros();
    let mut weight = 0.0f32;

    for i in 0..ring.len() {
        let a = ring[i].a;
        let apex = ring[i].b;
        let c = ring[(i + 1) % ring.len()].b;

        let target = project_to_corner_plane(mesh, p, apex, a, c);
        let w = 1.0 + corner_cosine(mesh, apex, a, c);
        sum += w * target.coords;
        weight += w;
    }

    if weight <= 0.0 {
        return;
    }
    let target = Point3::from(sum / weight);

    let basis = tensor_basis(mesh, rings, v, tensor_radius);
    if basis.axes.iter().any(|axis| *axis == Vector3::zeros()) {
        mesh.vertices[v as usize].position = target;
        return;
    }

    let delta = target - p;
    let mut moved = p;
    for (axis, value) in basis.axes.iter().zip(basis.values) {
        moved += (delta.dot(axis) / (1.0 + value)) * *axis;
    }
    mesh.vertices[v as usize].position = moved;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_rings::build_rings;

    /// Hexagonal fan in the z = 0 plane with a perturbed hub.
    fn perturbed_fan() -> SurfaceMesh {
        let mut positions = vec![0.3, 0.15, 0.0];
        for i in 0..6u32 {
            #[allow(clippy::cast_precision_loss)]
            let angle = std::f32::consts::FRAC_PI_3 * i as f32;
            positions.extend([angle.cos(), angle.sin(), 0.0]);
        }
        let mut indices = Vec::new();
        for i in 0..6u32 {
            indices.extend([0, 1 + i, 1 + (i + 1) % 6]);
        }
        SurfaceMesh::from_raw(&positions, &indices)
    }

    #[test]
    fn relocation_stays_in_surface_plane() {
        let mut mesh = perturbed_fan();
        let rings = build_rings(&mut mesh).unwrap();
        relocate_vertex(&mut mesh, &rings, 0, 2);

        let p = mesh.position(0);
        assert!(p.z.abs() < 1e-5, "hub left the plane: {p:?}");
    }

    #[test]
    fn relocation_centers_the_hub() {
        let mut mesh = perturbed_fan();
        let rings = build_rings(&mut mesh).unwrap();
        let before = mesh.position(0).coords.norm();
        relocate_vertex(&mut mesh, &rings, 0, 2);
        let after = mesh.position(0).coords.norm();

        // The rim centroid is the origin; the hub must move toward it.
        assert!(after < before, "hub moved outward: {before} -> {after}");
    }

    #[test]
    fn empty_ring_is_untouched() {
        let mut mesh = perturbed_fan();
        let mut rings = build_rings(&mut mesh).unwrap();
        rings.take_ring(0);
        let before = mesh.position(0);
        relocate_vertex(&mut mesh, &rings, 0, 2);
        assert_eq!(mesh.position(0), before);
    }
}
