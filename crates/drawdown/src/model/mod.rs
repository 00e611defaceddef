//! Steady-state head around a pumping well.
//!
//! Confined aquifers follow the Thiem equation, unconfined aquifers the
//! Dupuit-Forchheimer equation. Both functions are closed form and never
//! fail: degenerate inputs (zero transmissivity or conductivity) return a
//! `0.0` sentinel. Callers that need to tell a sentinel from a genuine zero
//! use the `try_*` variants returning [`HeadEstimate`].

pub mod calculations;
pub mod inverse;
mod tests;
pub mod types;

pub use calculations::{
    drawdown_series, dupuit_head, evaluate, thiem_head, try_dupuit_head, try_thiem_head,
};
pub use inverse::{thiem_discharge, thiem_outer_head, thiem_transmissivity};
pub use types::{AquiferModel, DrawdownMode, HeadEstimate};
