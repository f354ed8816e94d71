//! Global 1→4 surface refinement.
//!
//! Every triangle is split into four: one vertex is inserted at the
//! midpoint of each unique edge, the central triangle connects the three
//! midpoints, and three corner triangles fill the rest. Vertex count
//! grows by the number of unique edges and the face count exactly
//! quadruples.
//!
//! # Example
//!
//! ```
//! use tessel_types::unit_cube;
//! use tessel_refine::refine;
//!
//! let mut cube = unit_cube();
//! let result = refine(&mut cube).unwrap();
//!
//! // 8 corners + 18 edges, 4 * 12 faces.
//! assert_eq!(result.final_vertices, 26);
//! assert_eq!(result.final_faces, 48);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod refine;
mod result;

pub use error::{RefineError, RefineResult};
pub use refine::refine;
pub use result::RefineOutput;
