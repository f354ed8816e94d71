//! Mesh-wide interior angle statistics.

use tessel_types::SurfaceMesh;

use crate::kernel::interior_angle;

/// Interior angle distribution of a mesh, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct AngleStats {
    /// Smallest interior angle.
    pub min: f32,
    /// Largest interior angle.
    pub max: f32,
    /// Number of angles below the lower threshold.
    pub below: usize,
    /// Number of angles above the upper threshold.
    pub above: usize,
}

impl AngleStats {
    /// Whether every angle lies strictly inside `(min_target, max_target)`.
    #[must_use]
    pub fn within(&self, min_target: f32, max_target: f32) -> bool {
        self.min > min_target && self.max < max_target
    }
}

impl std::fmt::Display for AngleStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "angles [{:.3}, {:.3}] deg, {} below / {} above thresholds",
            self.min, self.max, self.below, self.above
        )
    }
}

/// Sweep every face corner and collect the angle distribution.
///
/// `min_threshold` and `max_threshold` (degrees) drive the `below` /
/// `above` counters; corners with a degenerate edge are skipped.
///
/// # Example
///
/// ```
/// use tessel_types::unit_cube;
/// use tessel_geometry::angle_stats;
///
/// let cube = unit_cube();
/// let stats = angle_stats(&cube, 15.0, 150.0);
/// // Right isoceles triangles: every angle is 45 or 90 degrees.
/// assert!(stats.within(15.0, 150.0));
/// ```
#[must_use]
pub fn angle_stats(mesh: &SurfaceMesh, min_threshold: f32, max_threshold: f32) -> AngleStats {
    let mut stats = AngleStats {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
        below: 0,
        above: 0,
    };

    for face in &mesh.faces {
        let [a, b, c] = face.v;
        for (apex, p, q) in [(a, b, c), (b, a, c), (c, a, b)] {
            let Some(angle) = interior_angle(mesh, apex, p, q) else {
                continue;
            };
            if angle < stats.min {
                stats.min = angle;
            }
            if angle > stats.max {
                stats.max = angle;
            }
            if angle < min_threshold {
                stats.below += 1;
            }
            if angle > max_threshold {
                stats.above += 1;
            }
        }
    }

    stats
}
