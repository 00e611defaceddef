use bevy::prelude::*;

use drawdown::constants::{
    CONDUCTIVITY_EXPONENT_RANGE, DEFAULT_CONDUCTIVITY, DEFAULT_TRANSMISSIVITY, DISCHARGE_RANGE,
    OUTER_RADIUS_RANGE, TRANSMISSIVITY_EXPONENT_RANGE,
};
use drawdown::params::{exponent_to_value, value_to_exponent};
use drawdown::{AquiferModel, DrawdownInputs, DrawdownMode, SamplingPolicy};

/// Which aquifer tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AquiferTab {
    #[default]
    Confined,
    Unconfined,
}

impl AquiferTab {
    pub const ALL: [AquiferTab; 2] = [AquiferTab::Confined, AquiferTab::Unconfined];

    pub fn label(self) -> &'static str {
        match self {
            AquiferTab::Confined => "Confined Aquifer (Thiem)",
            AquiferTab::Unconfined => "Unconfined Aquifer (Dupuit-Forchheimer)",
        }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            AquiferTab::Confined => "Steady state drawdown (confined aquifer), s = h2 - h1",
            AquiferTab::Unconfined => "Steady state drawdown (unconfined aquifer), s = h2 - h1",
        }
    }
}

/// Slider positions. Each tab keeps its own hydraulic exponent so switching
/// tabs does not reset the other model.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlState {
    pub tab: AquiferTab,
    /// Discharge Q (m³/d).
    pub discharge: f64,
    /// log10 of transmissivity (m²/d).
    pub transmissivity_exponent: f64,
    /// log10 of hydraulic conductivity (m/d).
    pub conductivity_exponent: f64,
    /// Outer radius r2 (m).
    pub outer_radius: f64,
    pub mode: DrawdownMode,
    pub sampling: SamplingPolicy,
}

impl FromWorld for ControlState {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<DrawdownInputs>()
            .map(Self::from_inputs)
            .unwrap_or_else(|| Self::from_inputs(&DrawdownInputs::default()))
    }
}

impl ControlState {
    /// Slider positions that reproduce `inputs`. Exponents are clamped to the
    /// slider ranges, with a warning when that changes the value.
    pub fn from_inputs(inputs: &DrawdownInputs) -> Self {
        let (default_t, _) = clamp_exponent(DEFAULT_TRANSMISSIVITY, TRANSMISSIVITY_EXPONENT_RANGE);
        let (default_k, _) = clamp_exponent(DEFAULT_CONDUCTIVITY, CONDUCTIVITY_EXPONENT_RANGE);

        let (tab, transmissivity_exponent, conductivity_exponent) = match inputs.model {
            AquiferModel::Confined { transmissivity } => (
                AquiferTab::Confined,
                slider_exponent(
                    "transmissivity",
                    transmissivity,
                    TRANSMISSIVITY_EXPONENT_RANGE,
                ),
                default_k,
            ),
            AquiferModel::Unconfined { conductivity } => (
                AquiferTab::Unconfined,
                default_t,
                slider_exponent("conductivity", conductivity, CONDUCTIVITY_EXPONENT_RANGE),
            ),
        };

        Self {
            tab,
            discharge: slider_value("discharge", inputs.discharge, DISCHARGE_RANGE),
            transmissivity_exponent,
            conductivity_exponent,
            outer_radius: slider_value("outer radius", inputs.outer_radius, OUTER_RADIUS_RANGE),
            mode: inputs.mode,
            sampling: inputs.sampling,
        }
    }

    /// Model for the active tab with the exponent converted to a value.
    pub fn model(&self) -> AquiferModel {
        match self.tab {
            AquiferTab::Confined => {
                AquiferModel::confined(exponent_to_value(self.transmissivity_exponent))
            }
            AquiferTab::Unconfined => {
                AquiferModel::unconfined(exponent_to_value(self.conductivity_exponent))
            }
        }
    }

    /// Overlay the slider values onto `base`, keeping fields the sliders do
    /// not control (well radius, reference head).
    pub fn to_inputs(&self, base: &DrawdownInputs) -> DrawdownInputs {
        DrawdownInputs {
            discharge: self.discharge,
            model: self.model(),
            outer_radius: self.outer_radius,
            mode: self.mode,
            sampling: self.sampling,
            ..*base
        }
    }
}

/// Sliders clamp their value when drawn, so clamp up front and say so.
fn slider_value(name: &str, value: f64, range: (f64, f64)) -> f64 {
    let clamped = value.clamp(range.0, range.1);
    if clamped != value {
        warn!(
            "Configured {name} {value} is outside the slider range {}..={}, using {clamped}",
            range.0, range.1
        );
    }
    clamped
}

fn slider_exponent(name: &str, value: f64, range: (f64, f64)) -> f64 {
    let (exponent, clamped) = clamp_exponent(value, range);
    if clamped {
        warn!(
            "Configured {name} {value} is outside the slider range {:.3}..={:.0}, using {:.3}",
            10f64.powf(range.0),
            10f64.powf(range.1),
            10f64.powf(exponent)
        );
    }
    exponent
}

/// log10 of `value` clamped to `range`, and whether clamping changed it.
pub(crate) fn clamp_exponent(value: f64, range: (f64, f64)) -> (f64, bool) {
    match value_to_exponent(value) {
        Some(exponent) => {
            let clamped = exponent.clamp(range.0, range.1);
            (clamped, clamped != exponent)
        }
        None => (range.0, true),
    }
}
