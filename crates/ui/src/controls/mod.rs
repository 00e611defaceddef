//! Drawdown explorer window: model tabs, parameter sliders, and the chart.
//!
//! Sliders edit `ControlState`; `apply_controls` converts it (including the
//! log10 transmissivity/conductivity exponents) into `DrawdownInputs`, which
//! the core plugin turns into a curve.

mod panels;
pub mod types;
mod ui_system;

pub use types::{AquiferTab, ControlState};
pub use ui_system::{apply_controls, drawdown_panel_ui};
