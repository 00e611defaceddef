use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DISCHARGE, DEFAULT_OUTER_RADIUS, REFERENCE_HEAD, WELL_RADIUS};
use crate::error::ParameterError;
use crate::model::{AquiferModel, DrawdownMode};
use crate::params::{finite, validate_model, RadialDomain, WellParameters};
use crate::sampling::SamplingPolicy;

/// Everything needed to produce one drawdown curve.
///
/// The UI (or the headless protocol) writes this resource; the plugin reacts
/// to changes.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawdownInputs {
    /// Well discharge Q (m³/d).
    pub discharge: f64,
    /// Aquifer type with its transmissivity or conductivity.
    pub model: AquiferModel,
    /// Outer radius r2 (m).
    pub outer_radius: f64,
    /// Well radius rw (m).
    pub well_radius: f64,
    /// Head at the outer boundary (m).
    pub reference_head: f64,
    pub sampling: SamplingPolicy,
    pub mode: DrawdownMode,
}

impl Default for DrawdownInputs {
    fn default() -> Self {
        Self {
            discharge: DEFAULT_DISCHARGE,
            model: AquiferModel::default(),
            outer_radius: DEFAULT_OUTER_RADIUS,
            well_radius: WELL_RADIUS,
            reference_head: REFERENCE_HEAD,
            sampling: SamplingPolicy::default(),
            mode: DrawdownMode::default(),
        }
    }
}

impl DrawdownInputs {
    /// Boundary check run before any formula is evaluated.
    pub fn validate(&self) -> Result<RadialDomain, ParameterError> {
        WellParameters::new(self.discharge, self.well_radius)?;
        validate_model(&self.model)?;
        finite("reference head", self.reference_head)?;
        let domain = RadialDomain::new(self.well_radius, self.outer_radius)?;
        self.sampling
            .validate_for(domain.well_radius, domain.outer_radius)?;
        Ok(domain)
    }
}

/// Sampled radii with the head and drawdown at each one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownCurve {
    pub model: AquiferModel,
    pub mode: DrawdownMode,
    pub radii: Vec<f64>,
    pub heads: Vec<f64>,
    pub drawdown: Vec<f64>,
}

impl DrawdownCurve {
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// `(radius, drawdown)` pairs in radial order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radii.iter().copied().zip(self.drawdown.iter().copied())
    }

    /// Largest drawdown on the curve (at the well face for physical inputs).
    pub fn max_drawdown(&self) -> f64 {
        self.drawdown.iter().copied().fold(0.0, f64::max)
    }

    /// Sample closest to radius `r`.
    pub fn nearest(&self, r: f64) -> Option<(f64, f64)> {
        if self.radii.is_empty() {
            return None;
        }
        let idx = self.radii.partition_point(|&x| x < r);
        let best = if idx == 0 {
            0
        } else if idx >= self.radii.len() {
            self.radii.len() - 1
        } else if (self.radii[idx] - r).abs() < (r - self.radii[idx - 1]).abs() {
            idx
        } else {
            idx - 1
        };
        Some((self.radii[best], self.drawdown[best]))
    }
}

/// Latest curve produced from `DrawdownInputs`, or the reason it was rejected.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawdownCurveState {
    pub curve: Option<DrawdownCurve>,
    pub error: Option<ParameterError>,
    /// Number of successful recomputations since startup.
    pub revision: u64,
}
