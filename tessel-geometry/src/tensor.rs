//! Neighborhood structure tensor and its closed-form eigen-basis.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use hashbrown::HashSet;
use nalgebra::{Matrix3, Vector3};
use tessel_rings::VertexRings;
use tessel_types::SurfaceMesh;

use crate::normal::vertex_normal;

/// Eigen-decomposition of the local structure tensor at a vertex.
///
/// `axes` are orthonormal, ordered by descending eigenvalue. The first
/// axis approximates the surface normal; movement along it is damped
/// hardest during relocation. `values` are the eigenvalues (non-negative
/// for the normal-covariance tensor), and `min_alignment` is the smallest
/// `|nᵢ · n_v|` seen across the neighborhood — a curvature indicator that
/// drops toward zero across ridges.
///
/// Degenerate regions can yield zero-length axes (a perfectly flat
/// neighborhood has a rank-one tensor); callers fall back to undamped
/// motion when that happens.
#[derive(Debug, Clone, Copy)]
pub struct TensorBasis {
    /// Orthonormal eigenvectors, largest eigenvalue first.
    pub axes: [Vector3<f32>; 3],
    /// Eigenvalues, descending.
    pub values: [f32; 3],
    /// Smallest absolute normal alignment observed in the neighborhood.
    pub min_alignment: f32,
}

/// Assemble and decompose the structure tensor `A = Σ nᵢ nᵢᵀ` over the
/// vertex `v` and its ring neighborhood out to `radius` rings.
///
/// The characteristic cubic is solved analytically in double precision;
/// eigenvectors come from the dominant adjugate column of the shifted
/// tensor. If the cubic degenerates to NaN roots, the identity basis is
/// returned with eigenvalues `(trace, 0, 0)`.
#[must_use]
pub fn tensor_basis(
    mesh: &SurfaceMesh,
    rings: &VertexRings,
    v: u32,
    radius: u32,
) -> TensorBasis {
    let center_normal = vertex_normal(mesh, rings, v);

    let mut tensor = outer(center_normal);
    let mut min_alignment = f32::INFINITY;

    // Breadth-first front over ring neighbors out to `radius`.
    let mut queue: Vec<(u32, u32)> = vec![(v, 0)];
    let mut visited: HashSet<u32> = HashSet::new();
    visited.insert(v);

    let mut head = 0;
    while head < queue.len() {
        let (index, dist) = queue[head];
        head += 1;

        if dist >= radius {
            continue;
        }
        for entry in rings.ring(index) {
            let m = entry.a;
            if visited.insert(m) {
                let neighbor_normal = vertex_normal(mesh, rings, m);
                let alignment = center_normal.dot(&neighbor_normal).abs();
                if alignment < min_alignment {
                    min_alignment = alignment;
                }
                tensor += outer(neighbor_normal);
                queue.push((m, dist + 1));
            }
        }
    }

    decompose(&tensor, min_alignment)
}

fn outer(n: Vector3<f32>) -> Matrix3<f64> {
    let n = n.cast::<f64>();
    Matrix3::new(
        n.x * n.x,
        n.x * n.y,
        n.x * n.z,
        n.x * n.y,
        n.y * n.y,
        n.y * n.z,
        n.x * n.z,
        n.y * n.z,
        n.z * n.z,
    )
}

/// Solve `det(A - λI) = 0` for a symmetric 3×3 and extract the basis.
#[allow(clippy::cast_possible_truncation)]
fn decompose(tensor: &Matrix3<f64>, min_alignment: f32) -> TensorBasis {
    let a00 = tensor[(0, 0)];
    let a01 = tensor[(0, 1)];
    let a02 = tensor[(0, 2)];
    let a11 = tensor[(1, 1)];
    let a12 = tensor[(1, 2)];
    let a22 = tensor[(2, 2)];

    // Characteristic cubic coefficients: determinant, sum of principal
    // minors, trace.
    let c0 = a00 * a11 * a22 + 2.0 * a01 * a02 * a12
        - a00 * a12 * a12
        - a11 * a02 * a02
        - a22 * a01 * a01;
    let c1 = a00 * a11 - a01 * a01 + a00 * a22 - a02 * a02 + a11 * a22 - a12 * a12;
    let c2 = a00 + a11 + a22;

    let a = (3.0 * c1 - c2 * c2) / 3.0;
    let b = (-2.0 * c2 * c2 * c2 + 9.0 * c1 * c2 - 27.0 * c0) / 27.0;
    let q = b * b / 4.0 + a * a * a / 27.0;

    let theta = (-q).sqrt().atan2(-0.5 * b);
    let p = (0.25 * b * b - q).sqrt();

    let cube_root = p.powf(1.0 / 3.0);
    let (sin_third, cos_third) = (theta / 3.0).sin_cos();
    let sqrt3 = 3.0f64.sqrt();

    let roots = [
        c2 / 3.0 + 2.0 * cube_root * cos_third,
        c2 / 3.0 - cube_root * (cos_third + sqrt3 * sin_third),
        c2 / 3.0 - cube_root * (cos_third - sqrt3 * sin_third),
    ];

    if roots.iter().any(|r| r.is_nan()) {
        // Perfectly axis-aligned flat neighborhood.
        return TensorBasis {
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            values: [c2 as f32, 0.0, 0.0],
            min_alignment,
        };
    }

    let mut sorted = roots;
    sorted.sort_by(|x, y| y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal));
    let [l1, l2, l3] = sorted;

    let e1 = adjugate_column(tensor, l1);
    let e2 = adjugate_column(tensor, l2);
    let e3 = e1.cross(&e2);

    TensorBasis {
        axes: [e1.cast::<f32>(), e2.cast::<f32>(), e3.cast::<f32>()],
        values: [l1 as f32, l2 as f32, l3 as f32],
        min_alignment,
    }
}

/// Eigenvector of a symmetric matrix for eigenvalue `lambda`: the
/// largest-norm column of `adj(A - λI)`, normalized (zero if all columns
/// vanish, which signals a repeated eigenvalue to the caller).
fn adjugate_column(tensor: &Matrix3<f64>, lambda: f64) -> Vector3<f64> {
    let a00 = tensor[(0, 0)] - lambda;
    let a01 = tensor[(0, 1)];
    let a02 = tensor[(0, 2)];
    let a11 = tensor[(1, 1)] - lambda;
    let a12 = tensor[(1, 2)];
    let a22 = tensor[(2, 2)] - lambda;

    let b0 = a11 * a22 - a12 * a12;
    let b1 = a02 * a12 - a01 * a22;
    let b2 = a00 * a22 - a02 * a02;
    let b3 = a01 * a12 - a02 * a11;
    let b4 = a01 * a02 - a12 * a00;
    let b5 = a00 * a11 - a01 * a01;

    let n0 = b0 * b0 + b1 * b1 + b3 * b3;
    let n1 = b1 * b1 + b2 * b2 + b4 * b4;
    let n2 = b3 * b3 + b4 * b4 + b5 * b5;

    let column = if n0 >= n1 && n0 >= n2 {
        Vector3::new(b0, b1, b3)
    } else if n1 >= n0 && n1 >= n2 {
        Vector3::new(b1, b2, b4)
    } else {
        Vector3::new(b3, b4, b5)
    };

    let length = column.norm();
    if length > 0.0 {
        column / length
    } else {
        Vector3::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tessel_rings::build_rings;
    use tessel_types::unit_cube;

    fn octahedron() -> tessel_types::SurfaceMesh {
        let positions = [
            1.0, 0.0, 0.0, // 0
            -1.0, 0.0, 0.0, // 1
            0.0, 1.0, 0.0, // 2
            0.0, -1.0, 0.0, // 3
            0.0, 0.0, 1.0, // 4
            0.0, 0.0, -1.0, // 5
        ];
        let indices = [
            0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4, //
            2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
        ];
        tessel_types::SurfaceMesh::from_raw(&positions, &indices)
    }

    #[test]
    fn eigenvalues_descend_and_are_nonnegative() {
        let mut mesh = octahedron();
        let rings = build_rings(&mut mesh).unwrap();
        for v in 0..6 {
            let basis = tensor_basis(&mesh, &rings, v, 2);
            assert!(basis.values[0] >= basis.values[1] - 1e-4);
            assert!(basis.values[1] >= basis.values[2] - 1e-4);
            assert!(basis.values[2] > -1e-3);
        }
    }

    /// 3×3 grid folded into a tent: a 90° ridge runs along the middle
    /// column. Vertex 4 sits on the ridge, interior.
    fn ridge_tent() -> tessel_types::SurfaceMesh {
        let mut positions = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                #[allow(clippy::cast_precision_loss)]
                let (x, y) = (col as f32 - 1.0, row as f32);
                positions.extend([x, y, 1.0 - x.abs()]);
            }
        }
        let mut indices = Vec::new();
        for row in 0..2u32 {
            for col in 0..2u32 {
                let v00 = row * 3 + col;
                let v10 = v00 + 1;
                let v01 = v00 + 3;
                let v11 = v01 + 1;
                indices.extend([v00, v10, v11, v00, v11, v01]);
            }
        }
        tessel_types::SurfaceMesh::from_raw(&positions, &indices)
    }

    #[test]
    fn basis_is_orthonormal_across_ridge() {
        let mut mesh = ridge_tent();
        let rings = build_rings(&mut mesh).unwrap();
        let basis = tensor_basis(&mesh, &rings, 4, 2);

        for axis in basis.axes {
            assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-3);
        }
        assert_relative_eq!(basis.axes[0].dot(&basis.axes[1]), 0.0, epsilon = 1e-3);
        assert_relative_eq!(basis.axes[0].dot(&basis.axes[2]), 0.0, epsilon = 1e-3);
        assert_relative_eq!(basis.axes[1].dot(&basis.axes[2]), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn dominant_axis_tracks_vertex_normal() {
        let mut mesh = ridge_tent();
        let rings = build_rings(&mut mesh).unwrap();
        let basis = tensor_basis(&mesh, &rings, 4, 2);
        let n = crate::vertex_normal(&mesh, &rings, 4);
        assert!(basis.axes[0].dot(&n).abs() > 0.9);
    }

    #[test]
    fn ridge_lowers_alignment_proxy() {
        let mut mesh = ridge_tent();
        let rings = build_rings(&mut mesh).unwrap();
        let basis = tensor_basis(&mesh, &rings, 4, 2);
        // Plane normals sit 45 degrees off the ridge normal.
        assert!(basis.min_alignment < 0.9);
        assert!(basis.min_alignment > 0.5);
    }

    #[test]
    fn trace_matches_eigenvalue_sum() {
        let mut mesh = unit_cube();
        let rings = build_rings(&mut mesh).unwrap();
        let basis = tensor_basis(&mesh, &rings, 0, 2);
        // Radius 2 on the cube reaches every vertex: eight normals, each
        // of unit length, so the eigenvalues must sum to 8.
        let sum: f32 = basis.values.iter().sum();
        assert_relative_eq!(sum, 8.0, epsilon = 1e-2);
    }

    #[test]
    fn min_alignment_flat_region_is_high() {
        // A gently tessellated flat patch: every normal is parallel, so
        // the alignment proxy stays at 1.
        let positions = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 2.0, 1.0, 0.0, //
            0.0, 2.0, 0.0, 1.0, 2.0, 0.0, 2.0, 2.0, 0.0,
        ];
        let indices = [
            0, 1, 4, 0, 4, 3, 1, 2, 5, 1, 5, 4, //
            3, 4, 7, 3, 7, 6, 4, 5, 8, 4, 8, 7,
        ];
        let mut mesh = tessel_types::SurfaceMesh::from_raw(&positions, &indices);
        let rings = build_rings(&mut mesh).unwrap();
        let basis = tensor_basis(&mesh, &rings, 4, 2);
        assert!(basis.min_alignment > 0.999);
    }
}
