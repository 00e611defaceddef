//! Drawdown curve assembly and the plugin that keeps it current.
//!
//! `build_curve` is the single entry point used by every caller: it validates
//! the inputs, samples radii, evaluates heads, and derives the drawdown
//! series. `DrawdownPlugin` recomputes `DrawdownCurveState` whenever the
//! `DrawdownInputs` resource changes.

pub mod calculations;
pub mod systems;
pub mod types;

pub use calculations::build_curve;
pub use systems::{recompute_drawdown_curve, DrawdownPlugin};
pub use types::{DrawdownCurve, DrawdownCurveState, DrawdownInputs};
