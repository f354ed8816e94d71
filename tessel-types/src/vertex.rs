//! Vertex type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space.
///
/// Besides its position a vertex carries a domain `marker` (an opaque
/// integer tag owned by the caller, e.g. a boundary-condition id) and a
/// `selected` flag. Deselected vertices are frozen: the optimization
/// passes neither move them nor remove them.
///
/// # Example
///
/// ```
/// use tessel_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// assert!(v1.selected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f32>,

    /// Domain marker. Opaque to the optimization passes.
    pub marker: i32,

    /// Whether the optimizer may move this vertex or retriangulate
    /// around it.
    pub selected: bool,
}

impl Vertex {
    /// Create a new selected vertex with marker zero.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            marker: 0,
            selected: true,
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use tessel_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f32, y: f32, z: f32) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::from_coords(0.0, 0.0, 0.0)
    }
}

impl From<Point3<f32>> for Vertex {
    fn from(position: Point3<f32>) -> Self {
        Self::new(position)
    }
}

impl From<[f32; 3]> for Vertex {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}
