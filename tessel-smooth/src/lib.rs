//! Angle-driven surface smoothing.
//!
//! The driver walks every selected vertex in index order and applies two
//! local operations per vertex:
//!
//! - **Relocation**: a weighted average of tangent-plane projections of
//!   the vertex over its one-ring, damped along the eigen-basis of the
//!   local structure tensor so the vertex glides along the surface
//!   instead of shrinking it.
//! - **Edge flipping**: each outgoing edge is flipped when the flipped
//!   diagonal raises the minimum interior angle of the incident triangle
//!   pair, optionally refusing flips across sharp dihedrals to preserve
//!   ridges.
//!
//! Iteration stops as soon as every interior angle lies inside the target
//! band, or when the iteration bound is hit.
//!
//! # Example
//!
//! ```
//! use tessel_types::unit_cube;
//! use tessel_smooth::{smooth, SmoothParams};
//!
//! let mut mesh = unit_cube();
//! let params = SmoothParams::new().with_iterations(3);
//! let result = smooth(&mut mesh, &params).unwrap();
//!
//! assert_eq!(mesh.face_count(), 12);
//! assert!(result.iterations <= 3);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod flip;
mod normals;
mod params;
mod relocate;
mod result;
mod smooth;

pub use error::{SmoothError, SmoothResult};
pub use params::SmoothParams;
pub use relocate::relocate_vertex;
pub use result::SmoothOutput;
pub use smooth::{smooth, smooth_normals};
