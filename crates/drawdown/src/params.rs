//! Boundary validation for well, aquifer, and domain parameters, plus the
//! log-scale slider convention (`value = 10^exponent`).

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SAMPLES;
use crate::error::ParameterError;
use crate::model::AquiferModel;

/// Pumping rate and well geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellParameters {
    /// Discharge Q (m³/d).
    pub discharge: f64,
    /// Well radius rw (m).
    pub well_radius: f64,
}

impl WellParameters {
    pub fn new(discharge: f64, well_radius: f64) -> Result<Self, ParameterError> {
        let params = Self {
            discharge,
            well_radius,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        finite("discharge", self.discharge)?;
        finite("well radius", self.well_radius)?;
        if self.discharge < 0.0 {
            return Err(ParameterError::NegativeDischarge(self.discharge));
        }
        if self.well_radius <= 0.0 {
            return Err(ParameterError::NonPositiveWellRadius(self.well_radius));
        }
        Ok(())
    }
}

/// Radial extent of the plot: from the well face to the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialDomain {
    pub well_radius: f64,
    pub outer_radius: f64,
}

impl RadialDomain {
    /// Build a domain, rejecting `rw <= 0` and `r2 <= rw`.
    pub fn new(well_radius: f64, outer_radius: f64) -> Result<Self, ParameterError> {
        finite("well radius", well_radius)?;
        finite("outer radius", outer_radius)?;
        if well_radius <= 0.0 {
            return Err(ParameterError::NonPositiveWellRadius(well_radius));
        }
        if outer_radius <= well_radius {
            return Err(ParameterError::OuterRadiusNotBeyondWell {
                well_radius,
                outer_radius,
            });
        }
        Ok(Self {
            well_radius,
            outer_radius,
        })
    }
}

/// Reject zero, negative, or non-finite hydraulic properties.
pub fn validate_model(model: &AquiferModel) -> Result<(), ParameterError> {
    match *model {
        AquiferModel::Confined { transmissivity } => {
            finite("transmissivity", transmissivity)?;
            if transmissivity <= 0.0 {
                return Err(ParameterError::NonPositiveTransmissivity(transmissivity));
            }
        }
        AquiferModel::Unconfined { conductivity } => {
            finite("conductivity", conductivity)?;
            if conductivity <= 0.0 {
                return Err(ParameterError::NonPositiveConductivity(conductivity));
            }
        }
    }
    Ok(())
}

/// Reject caller-supplied evaluation radii that are non-finite, not
/// positive, or more than [`MAX_SAMPLES`] long.
pub fn validate_radii(radii: &[f64]) -> Result<(), ParameterError> {
    if radii.len() > MAX_SAMPLES {
        return Err(ParameterError::TooManySamples {
            estimated: radii.len() as f64,
            max: MAX_SAMPLES,
        });
    }
    for &r in radii {
        finite("radius", r)?;
        if r <= 0.0 {
            return Err(ParameterError::NonPositiveRadius(r));
        }
    }
    Ok(())
}

/// Convert a log10 slider exponent into the physical value.
pub fn exponent_to_value(exponent: f64) -> f64 {
    10f64.powf(exponent)
}

/// Inverse of [`exponent_to_value`]; non-positive values map to `None`.
pub fn value_to_exponent(value: f64) -> Option<f64> {
    (value > 0.0).then(|| value.log10())
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name })
    }
}
