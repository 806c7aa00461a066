//! Uniform parameter sampling shared by curve and surface tessellation.

use bez_core::{BezError, Result, Tolerance};
use serde::{Deserialize, Serialize};

/// Evaluation algorithm used when sampling a curve or surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMethod {
    /// Direct Bernstein-polynomial summation.
    #[default]
    Analytical,
    /// Repeated linear interpolation (de Casteljau).
    Casteljau,
}

/// Sampling configuration for tessellating curves and surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationParams {
    /// Parameter increment along `u` (curves use this one only).
    pub step_u: f64,
    /// Parameter increment along `v`.
    pub step_v: f64,
    pub method: EvalMethod,
}

impl TessellationParams {
    pub const DEFAULT_STEP: f64 = 0.01;

    pub fn uniform(step: f64, method: EvalMethod) -> Self {
        Self {
            step_u: step,
            step_v: step,
            method,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_step(self.step_u)?;
        check_step(self.step_v)
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_STEP, EvalMethod::default())
    }
}

/// A step must be finite and strictly positive, otherwise sampling would
/// never reach the end of the domain.
pub fn check_step(step: f64) -> Result<()> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(BezError::InvalidStep(format!(
            "parameter step must be finite and > 0, got {step}"
        )))
    }
}

/// Largest number of samples along one direction, bounded by the `u32`
/// vertex indices of the meshes built from them.
pub const MAX_SAMPLES: usize = u32::MAX as usize;

/// Number of samples taken on `[0, 1]`: `floor(1 / step) + 1`.
pub fn sample_count(step: f64) -> Result<usize> {
    check_step(step)?;
    Tolerance::default()
        .whole_steps(1.0, step)
        .and_then(|steps| steps.checked_add(1))
        .filter(|&count| count <= MAX_SAMPLES)
        .ok_or_else(|| {
            BezError::InvalidStep(format!(
                "parameter step {step} needs more than {MAX_SAMPLES} samples"
            ))
        })
}

/// Parameters `0, step, 2 * step, ...` up to and including the last one that
/// does not pass 1. The final sample is below 1 when `step` does not divide
/// the unit interval.
pub fn parameter_samples(step: f64) -> Result<impl Iterator<Item = f64> + Clone> {
    let count = sample_count(step)?;
    Ok((0..count).map(move |k| k as f64 * step))
}
