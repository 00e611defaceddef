//! Steady-state drawdown around a pumping well.
//!
//! The math core is pure: [`sampling::sample_radii`] picks evaluation radii,
//! [`model::evaluate`] maps them to hydraulic head under the Thiem (confined)
//! or Dupuit-Forchheimer (unconfined) equation, and
//! [`model::drawdown_series`] turns head into the plotted drawdown.
//! [`curve::DrawdownPlugin`] wires that into a Bevy app.

pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod model;
pub mod params;
pub mod protocol;
pub mod sampling;

pub use curve::{build_curve, DrawdownCurve, DrawdownCurveState, DrawdownInputs, DrawdownPlugin};
pub use error::{ConfigError, ParameterError};
pub use model::{AquiferModel, DrawdownMode, HeadEstimate};
pub use sampling::{sample_radii, SamplingPolicy};
