//! Result types for smoothing operations.

use tessel_geometry::AngleStats;

/// Outcome of a smoothing run.
#[derive(Debug, Clone, Copy)]
pub struct SmoothOutput {
    /// Whether the angle band was reached within the iteration bound.
    pub goal_reached: bool,

    /// Number of iterations executed.
    pub iterations: u32,

    /// Angle distribution before the first iteration.
    pub initial_angles: AngleStats,

    /// Angle distribution after the last iteration.
    pub final_angles: AngleStats,
}

impl SmoothOutput {
    /// How much the minimum angle improved, in degrees.
    #[must_use]
    pub fn min_angle_gain(&self) -> f32 {
        self.final_angles.min - self.initial_angles.min
    }
}

impl std::fmt::Display for SmoothOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Smooth: {} after {} iterations, [{:.2}, {:.2}] -> [{:.2}, {:.2}] deg",
            if self.goal_reached { "goal reached" } else { "bound hit" },
            self.iterations,
            self.initial_angles.min,
            self.initial_angles.max,
            self.final_angles.min,
            self.final_angles.max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(min: f32, max: f32) -> AngleStats {
        AngleStats {
            min,
            max,
            below: 0,
            above: 0,
        }
    }

    #[test]
    fn display_mentions_outcome() {
        let output = SmoothOutput {
            goal_reached: true,
            iterations: 4,
            initial_angles: stats(10.0, 160.0),
            final_angles: stats(22.0, 140.0),
        };
        let text = format!("{output}");
        assert!(text.contains("goal reached"));
        assert!(text.contains('4'));
    }

    #[test]
    fn min_angle_gain() {
        let output = SmoothOutput {
            goal_reached: false,
            iterations: 1,
            initial_angles: stats(10.0, 160.0),
            final_angles: stats(25.0, 150.0),
        };
        assert!((output.min_angle_gain() - 15.0).abs() < 1e-6);
    }
}
