use serde::{Deserialize, Serialize};

/// Numeric tolerances shared by evaluation, sampling and meshing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Distance tolerance (in model units) for point comparisons.
    pub linear: f64,
    /// Slack applied to parameter counts so that `1.0 / 0.1` still yields ten
    /// whole steps despite rounding.
    pub parametric: f64,
    /// Angular tolerance, in degrees.
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_PARAMETRIC: f64 = 1e-9;
    pub const DEFAULT_ANGULAR: f64 = 1e-6;

    pub fn new(linear: f64, parametric: f64, angular: f64) -> Self {
        Self {
            linear,
            parametric,
            angular,
        }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            parametric: Self::DEFAULT_PARAMETRIC,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// Tolerance at which the Bernstein and de Casteljau evaluators are
    /// expected to agree for every supported degree.
    pub fn loose() -> Self {
        Self {
            linear: 1e-4,
            parametric: 1e-7,
            angular: 1e-4,
        }
    }

    /// Number of whole `step`s that fit in `span`, forgiving rounding noise.
    ///
    /// `None` when the count is not finite or does not fit in a `usize`.
    pub fn whole_steps(self, span: f64, step: f64) -> Option<usize> {
        let steps = (span / step + self.parametric).floor();
        if steps.is_finite() && steps >= 0.0 && steps < usize::MAX as f64 {
            Some(steps as usize)
        } else {
            None
        }
    }

    /// Whether `step` degrees divide `total` degrees into whole parts.
    pub fn divides_angle(self, total: f64, step: f64) -> bool {
        let parts = total / step;
        (parts - parts.round()).abs() * step < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
