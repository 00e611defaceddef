use serde::{Deserialize, Serialize};

use crate::constants::{
    COARSE_STEP, FINE_STEP, MAX_SAMPLES, TRANSITION_RADIUS, UNIFORM_SAMPLE_COUNT,
};
use crate::error::ParameterError;

/// How radii are spread between the well and the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SamplingPolicy {
    /// `count` evenly spaced samples over `[rw + r2/1000, r2]`.
    Uniform { count: usize },
    /// Fine steps near the well, coarse steps beyond `transition_radius`.
    TwoTier {
        fine_step: f64,
        transition_radius: f64,
        coarse_step: f64,
    },
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::two_tier()
    }
}

impl SamplingPolicy {
    /// Uniform policy with the standard sample count.
    pub fn uniform() -> Self {
        SamplingPolicy::Uniform {
            count: UNIFORM_SAMPLE_COUNT,
        }
    }

    /// Two-tier policy with the standard steps (0.15 m to 30 m, then 10 m).
    pub fn two_tier() -> Self {
        SamplingPolicy::TwoTier {
            fine_step: FINE_STEP,
            transition_radius: TRANSITION_RADIUS,
            coarse_step: COARSE_STEP,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SamplingPolicy::Uniform { .. } => "Uniform",
            SamplingPolicy::TwoTier { .. } => "Two-tier",
        }
    }

    /// Reject policies that cannot make progress (zero count, non-positive
    /// or non-finite steps).
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            SamplingPolicy::Uniform { count } => {
                if count == 0 {
                    return Err(ParameterError::EmptySampling);
                }
            }
            SamplingPolicy::TwoTier {
                fine_step,
                transition_radius,
                coarse_step,
            } => {
                if !fine_step.is_finite()
                    || !coarse_step.is_finite()
                    || !transition_radius.is_finite()
                {
                    return Err(ParameterError::NonFinite {
                        name: "sampling step",
                    });
                }
                if fine_step <= 0.0 || coarse_step <= 0.0 {
                    return Err(ParameterError::EmptySampling);
                }
            }
        }
        Ok(())
    }

    /// Upper estimate of how many radii the policy yields over `[rw, r2]`.
    ///
    /// Computed in `f64` so absurd inputs cannot overflow.
    pub fn estimated_count(&self, rw: f64, r2: f64) -> f64 {
        match *self {
            SamplingPolicy::Uniform { count } => count as f64,
            SamplingPolicy::TwoTier {
                fine_step,
                transition_radius,
                coarse_step,
            } => {
                let fine_span = (transition_radius.min(r2) - rw).max(0.0);
                let coarse_span = (r2 - transition_radius.max(rw)).max(0.0);
                fine_span / fine_step + coarse_span / coarse_step + 2.0
            }
        }
    }

    /// [`validate`](Self::validate) plus the [`MAX_SAMPLES`] budget for the
    /// domain `[rw, r2]`.
    pub fn validate_for(&self, rw: f64, r2: f64) -> Result<(), ParameterError> {
        self.validate()?;
        let estimated = self.estimated_count(rw, r2);
        if !(estimated <= MAX_SAMPLES as f64) {
            return Err(ParameterError::TooManySamples {
                estimated,
                max: MAX_SAMPLES,
            });
        }
        Ok(())
    }
}
