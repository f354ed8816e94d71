//! Decimation parameters.

/// Parameters for a decimation pass.
///
/// A vertex is removed when `ratio_flatness * ratio_denseness` falls
/// below `coarseness_rate`, where the flatness ratio is
/// `|λ₂/λ₁|^flatness_rate` of the local structure tensor (1 when
/// `flatness_rate` is zero) and the denseness ratio is the largest
/// incident edge length over the local average length, raised to
/// `denseness_weight` (1 when the weight is zero).
#[derive(Debug, Clone)]
pub struct CoarsenParams {
    /// Removal threshold for the combined quality ratio.
    pub coarseness_rate: f32,

    /// Exponent on the eigenvalue flatness ratio; zero disables the
    /// curvature criterion.
    pub flatness_rate: f32,

    /// Exponent on the edge-length denseness ratio; zero disables the
    /// density criterion.
    pub denseness_weight: f32,

    /// When positive, additionally require the neighborhood normal
    /// alignment proxy to exceed this value before removing.
    pub max_normal_angle: f32,

    /// Ring radius of the structure-tensor neighborhood.
    pub tensor_radius: u32,
}

impl CoarsenParams {
    /// Density-driven preset: remove vertices in over-dense regions.
    #[must_use]
    pub fn dense(coarseness_rate: f32) -> Self {
        Self {
            coarseness_rate,
            flatness_rate: 0.0,
            denseness_weight: 10.0,
            max_normal_angle: -1.0,
            tensor_radius: 2,
        }
    }

    /// Flatness-driven preset: remove vertices in flat regions.
    #[must_use]
    pub fn flat(coarseness_rate: f32) -> Self {
        Self {
            coarseness_rate,
            flatness_rate: 1.0,
            denseness_weight: 0.0,
            max_normal_angle: -1.0,
            tensor_radius: 2,
        }
    }

    /// Set the removal threshold.
    #[must_use]
    pub const fn with_coarseness_rate(mut self, rate: f32) -> Self {
        self.coarseness_rate = rate;
        self
    }

    /// Set the flatness exponent.
    #[must_use]
    pub const fn with_flatness_rate(mut self, rate: f32) -> Self {
        self.flatness_rate = rate;
        self
    }

    /// Set the denseness exponent.
    #[must_use]
    pub const fn with_denseness_weight(mut self, weight: f32) -> Self {
        self.denseness_weight = weight;
        self
    }

    /// Set the normal-alignment gate.
    #[must_use]
    pub const fn with_max_normal_angle(mut self, angle: f32) -> Self {
        self.max_normal_angle = angle;
        self
    }

    /// Set the structure-tensor neighborhood radius.
    #[must_use]
    pub const fn with_tensor_radius(mut self, radius: u32) -> Self {
        self.tensor_radius = radius;
        self
    }
}

impl Default for CoarsenParams {
    fn default() -> Self {
        Self::flat(0.05)
    }
}
