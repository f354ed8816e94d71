//! Core surface mesh types for Tessel.
//!
//! This crate provides the foundational types for the mesh optimization
//! pipeline:
//!
//! - [`Vertex`] - A point in 3D space with a domain marker and a frozen flag
//! - [`Face`] - A triangle referencing vertices by index
//! - [`SurfaceMesh`] - An indexed triangle mesh with domain metadata
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Coordinate System
//!
//! Coordinates are `f32` in a right-handed coordinate system. Face winding
//! is **counter-clockwise (CCW) when viewed from outside**; normals point
//! outward by the right-hand rule.
//!
//! # Selection
//!
//! Every vertex and face carries a `selected` flag. The optimization passes
//! only move, flip around, or remove selected vertices; deselecting a vertex
//! freezes it in place. Adjacency construction deselects vertices whose
//! one-ring cannot be closed.
//!
//! # Example
//!
//! ```
//! use tessel_types::{SurfaceMesh, Vertex, Point3};
//!
//! let mut mesh = SurfaceMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push(tessel_types::Face::new([0, 1, 2]));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod face;
mod mesh;
mod vertex;

pub use bounds::Aabb;
pub use face::Face;
pub use mesh::{unit_cube, SurfaceMesh};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
