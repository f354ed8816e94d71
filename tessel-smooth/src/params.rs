//! Smoothing parameters.

/// Parameters for the angle-driven smoothing loop.
#[derive(Debug, Clone)]
pub struct SmoothParams {
    /// Lower angle target in degrees: iterate until every interior angle
    /// exceeds this.
    pub min_angle: f32,

    /// Upper angle target in degrees: iterate until every interior angle
    /// stays below this.
    pub max_angle: f32,

    /// Maximum number of smoothing iterations.
    pub iterations: u32,

    /// Refuse edge flips across sharp dihedrals (more than 30 degrees
    /// between the incident face normals).
    pub preserve_ridges: bool,

    /// Ring radius of the structure-tensor neighborhood.
    pub tensor_radius: u32,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            min_angle: 15.0,
            max_angle: 150.0,
            iterations: 15,
            preserve_ridges: false,
            tensor_radius: 2,
        }
    }
}

impl SmoothParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parameters with a specific angle band.
    #[must_use]
    pub fn with_angle_targets(min_angle: f32, max_angle: f32) -> Self {
        Self {
            min_angle,
            max_angle,
            ..Self::default()
        }
    }

    /// Set the iteration bound.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set ridge preservation.
    #[must_use]
    pub const fn with_preserve_ridges(mut self, preserve: bool) -> Self {
        self.preserve_ridges = preserve;
        self
    }

    /// Set the structure-tensor neighborhood radius.
    #[must_use]
    pub const fn with_tensor_radius(mut self, radius: u32) -> Self {
        self.tensor_radius = radius;
        self
    }
}
