//! Surface mesh optimization toolkit.
//!
//! Tessel improves the triangle quality of a surface mesh embedded in R³
//! while approximately preserving its geometry. The umbrella crate
//! re-exports the member crates and adds the default optimization
//! pipeline.
//!
//! # Quick Start
//!
//! ```
//! use tessel::prelude::*;
//!
//! // A mesh from raw vertex and index arrays.
//! let mut mesh = tessel::types::unit_cube();
//!
//! // Improve angles for up to five iterations.
//! let params = SmoothParams::with_angle_targets(15.0, 150.0).with_iterations(5);
//! let result = smooth(&mut mesh, &params).unwrap();
//! assert!(result.goal_reached);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `SurfaceMesh`, `Vertex`, `Face`, `Aabb`, transforms
//! - [`rings`] - ordered one-ring adjacency
//! - [`geometry`] - geometric predicates, normals, structure tensor
//! - [`smooth`] - vertex relocation, edge flipping, normal smoothing
//! - [`coarsen`] - decimation with hole retriangulation
//! - [`refine`] - global 1→4 midpoint refinement
//!
//! # Feature Flags
//!
//! - `serde` - serialization for the core mesh types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod pipeline;

/// Core data structures: `SurfaceMesh`, `Vertex`, `Face`, `Aabb`.
pub use tessel_types as types;

/// Ordered one-ring adjacency.
pub use tessel_rings as rings;

/// Geometric predicates, vertex normals, structure tensor.
pub use tessel_geometry as geometry;

/// Vertex relocation, edge flipping, normal smoothing.
pub use tessel_smooth as smooth;

/// Decimation with hole retriangulation.
pub use tessel_coarsen as coarsen;

/// Global 1→4 midpoint refinement.
pub use tessel_refine as refine;

pub use pipeline::{optimize_default, OptimizeError};

/// Common imports for mesh optimization.
///
/// # Usage
///
/// ```
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_types::{Aabb, Face, SurfaceMesh, Vertex};

    // Adjacency
    pub use tessel_rings::{build_rings, VertexRings};

    // Quality measures
    pub use tessel_geometry::{angle_stats, AngleStats};

    // Operations
    pub use tessel_coarsen::{coarsen, coarsen_dense, coarsen_flat, CoarsenParams};
    pub use tessel_refine::refine;
    pub use tessel_smooth::{smooth, smooth_normals, SmoothParams};

    // Pipeline
    pub use crate::optimize_default;
}
