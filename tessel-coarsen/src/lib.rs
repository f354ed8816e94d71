//! Vertex decimation for surface meshes.
//!
//! A decimation pass removes selected vertices whose neighborhood is flat
//! (structure-tensor eigenvalue ratio) or over-dense (incident edge
//! length against the local average), retriangulates each hole with a
//! minimum-valence splitting heuristic, and relocates the surviving
//! neighbors along the surface. Eligibility is evaluated against the
//! snapshot at pass start; removals commit serially in index order.
//!
//! # Example
//!
//! ```
//! use tessel_types::unit_cube;
//! use tessel_coarsen::{coarsen, CoarsenParams};
//!
//! let mut cube = unit_cube();
//! let result = coarsen(&mut cube, &CoarsenParams::flat(0.05)).unwrap();
//!
//! // Cube corners are sharp: nothing qualifies for removal.
//! assert_eq!(result.vertices_removed, 0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod coarsen;
mod error;
mod params;
mod polygon;
mod result;

pub use coarsen::{coarsen, coarsen_dense, coarsen_flat};
pub use error::{CoarsenError, CoarsenResult};
pub use params::CoarsenParams;
pub use result::CoarsenOutput;
