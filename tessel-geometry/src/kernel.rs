//! Corner kernel: pure functions over indexed vertex coordinates.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use nalgebra::{Point3, Vector3};
use tessel_types::SurfaceMesh;

/// Normalize a vector, mapping the zero vector to itself.
///
/// Degenerate edges collapse to zero contributions instead of NaNs; every
/// predicate in this crate relies on that convention.
#[inline]
#[must_use]
pub fn normalized_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let length = v.norm();
    if length > 0.0 {
        v / length
    } else {
        Vector3::zeros()
    }
}

/// Unit vector from vertex `from` toward vertex `to`.
#[inline]
#[must_use]
pub fn unit_toward(mesh: &SurfaceMesh, from: u32, to: u32) -> Vector3<f32> {
    normalized_or_zero(mesh.position(to) - mesh.position(from))
}

/// Cosine of the corner angle at `apex` between the edges toward `b` and
/// `c`.
///
/// Doubles as the "bad angle" proxy in the flip predicate: a larger
/// cosine is a smaller angle.
#[inline]
#[must_use]
pub fn corner_cosine(mesh: &SurfaceMesh, apex: u32, b: u32, c: u32) -> f32 {
    unit_toward(mesh, apex, b).dot(&unit_toward(mesh, apex, c))
}

/// Unit normal of the corner `(apex; b, c)`:
/// `normalize(hat(apex,c) × hat(apex,b))`.
#[inline]
#[must_use]
pub fn corner_normal(mesh: &SurfaceMesh, apex: u32, b: u32, c: u32) -> Vector3<f32> {
    let toward_b = unit_toward(mesh, apex, b);
    let toward_c = unit_toward(mesh, apex, c);
    normalized_or_zero(toward_c.cross(&toward_b))
}

/// Interior angle at vertex `a` of triangle `(a, b, c)`, in degrees.
///
/// Computed from the law of cosines on squared edge lengths. Returns
/// `None` when an edge incident to `a` is degenerate; callers filter
/// these corners out of their statistics.
#[must_use]
pub fn interior_angle(mesh: &SurfaceMesh, a: u32, b: u32, c: u32) -> Option<f32> {
    let pa = mesh.position(a);
    let pb = mesh.position(b);
    let pc = mesh.position(c);

    let ab = (pa - pb).norm_squared();
    let ac = (pa - pc).norm_squared();
    let bc = (pb - pc).norm_squared();

    if ab == 0.0 || ac == 0.0 {
        return None;
    }

    let cosine = 0.5 * (ab + ac - bc) / (ab * ac).sqrt();
    Some(cosine.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Rotate `s` by `alpha` radians about the axis given in spherical
/// coordinates `(theta, phi)`, `phi` measured up from the xy-plane.
///
/// Composed as: rotate the axis onto z, spin about z by `alpha`, rotate
/// back. Used by normal smoothing only.
#[must_use]
pub fn rotate_about_axis(s: Vector3<f32>, theta: f32, phi: f32, alpha: f32) -> Vector3<f32> {
    let tilt = std::f32::consts::FRAC_PI_2 - phi;
    let (sin_tilt, cos_tilt) = tilt.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    // Axis-to-z frame and its transpose.
    let to_axis = nalgebra::Matrix3::new(
        cos_tilt * cos_theta,
        cos_tilt * sin_theta,
        -sin_tilt,
        -sin_theta,
        cos_theta,
        0.0,
        sin_tilt * cos_theta,
        sin_tilt * sin_theta,
        cos_tilt,
    );
    let from_axis = to_axis.transpose();

    let local = to_axis * s;
    let (sin_alpha, cos_alpha) = alpha.sin_cos();
    let spun = Vector3::new(
        cos_alpha * local.x - sin_alpha * local.y,
        sin_alpha * local.x + cos_alpha * local.y,
        local.z,
    );

    from_axis * spun
}

/// Project `p` onto the local tangent plane at the corner of `apex` with
/// arms toward `b` and `c`.
///
/// The plane passes through `apex` and is spanned by the corner bisector
/// `t = normalize(hat(apex,b) + hat(apex,c))` and the corner normal
/// `n = normalize(hat(apex,b) × hat(apex,c))`; the returned point is the
/// tangent-space relocation target for `p`.
#[must_use]
pub fn project_to_corner_plane(
    mesh: &SurfaceMesh,
    p: Point3<f32>,
    apex: u32,
    b: u32,
    c: u32,
) -> Point3<f32> {
    let origin = mesh.position(apex);
    let toward_b = unit_toward(mesh, apex, b);
    let toward_c = unit_toward(mesh, apex, c);

    let bisector = normalized_or_zero(0.5 * (toward_b + toward_c));
    let normal = normalized_or_zero(toward_b.cross(&toward_c));

    let along = bisector.dot(&(p - origin));
    let foot = origin + along * bisector;
    let lift = normal.dot(&(p - foot));
    foot + lift * normal
}
