//! Ordered one-ring vertex adjacency.
//!
//! For every vertex `v` this crate maintains a cyclic, counter-clockwise
//! sequence of [`RingEntry`] records `(a, b, face)`, each meaning "the
//! triangle `(v, a, b)` is CCW and is face `face`". Consecutive records
//! share an edge: the `b` of one record is the `a` of the next, and for a
//! closed ring the last record's `b` wraps around to the first record's
//! `a`.
//!
//! Construction is tolerant: malformed faces are reported and skipped,
//! vertices referenced by no face are compacted away, and vertices whose
//! ring cannot be closed are deselected rather than aborting the build.
//!
//! # Example
//!
//! ```
//! use tessel_types::unit_cube;
//! use tessel_rings::build_rings;
//!
//! let mut cube = unit_cube();
//! let rings = build_rings(&mut cube).unwrap();
//!
//! // Every face contributes one record to each of its three corners.
//! assert_eq!(rings.total_entries(), 3 * cube.face_count());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod build;
mod error;
mod rings;

pub use build::build_rings;
pub use error::{RingsError, RingsResult};
pub use rings::{RingEntry, VertexRings};
