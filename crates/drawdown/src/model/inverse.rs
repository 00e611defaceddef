//! Thiem relation rearranged for discharge, transmissivity, or the outer head.
//!
//! Given heads `h1` at `r1` and `h2` at `r2`. Like the forward forms these
//! return `0.0` instead of dividing by zero.

use std::f64::consts::PI;

/// `Q = 2π T (h2 - h1) / ln(r2 / r1)`. Returns `0.0` when `r1 == r2`.
pub fn thiem_discharge(transmissivity: f64, h1: f64, h2: f64, r1: f64, r2: f64) -> f64 {
    let log_ratio = (r2 / r1).ln();
    if log_ratio == 0.0 {
        return 0.0;
    }
    2.0 * PI * transmissivity * (h2 - h1) / log_ratio
}

/// `T = Q ln(r2 / r1) / (2π (h2 - h1))`. Returns `0.0` when `h1 == h2`.
pub fn thiem_transmissivity(discharge: f64, h1: f64, h2: f64, r1: f64, r2: f64) -> f64 {
    if h1 == h2 {
        return 0.0;
    }
    discharge / (2.0 * PI * (h2 - h1)) * (r2 / r1).ln()
}

/// `h2 = h1 + Q / (2π T) · ln(r2 / r1)`. Returns `0.0` when `T == 0`.
pub fn thiem_outer_head(discharge: f64, transmissivity: f64, h1: f64, r1: f64, r2: f64) -> f64 {
    if transmissivity == 0.0 {
        return 0.0;
    }
    discharge / (2.0 * PI * transmissivity) * (r2 / r1).ln() + h1
}
