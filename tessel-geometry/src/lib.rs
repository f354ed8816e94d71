//! Geometric predicates for surface mesh optimization.
//!
//! Three layers, all pure with respect to the mesh:
//!
//! - A corner kernel over indexed vertices: unit edges, corner cosines and
//!   normals, law-of-cosines interior angles, rotation about a spherical
//!   axis, and projection onto the tangent plane of a triangle corner.
//! - Per-vertex quantities that read the one-ring: the sign-consistent
//!   averaged [`vertex_normal`] and the neighborhood structure tensor with
//!   its closed-form eigen-basis ([`tensor_basis`]).
//! - Mesh-wide [`angle_stats`], the quality measure the smoothing driver
//!   iterates against.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod kernel;
mod normal;
mod stats;
mod tensor;

pub use kernel::{
    corner_cosine, corner_normal, interior_angle, normalized_or_zero, project_to_corner_plane,
    rotate_about_axis, unit_toward,
};
pub use normal::vertex_normal;
pub use stats::{angle_stats, AngleStats};
pub use tensor::{tensor_basis, TensorBasis};
