use std::f64::consts::PI;

use super::types::{AquiferModel, DrawdownMode, HeadEstimate};

/// Thiem head at radius `r` for a well of radius `rw`:
/// `h_ref - Q / (2π T) · ln(r / rw)`.
///
/// Returns the `0.0` sentinel when `transmissivity == 0`.
pub fn thiem_head(
    discharge: f64,
    transmissivity: f64,
    reference_head: f64,
    well_radius: f64,
    r: f64,
) -> f64 {
    try_thiem_head(discharge, transmissivity, reference_head, well_radius, r).or_sentinel()
}

pub fn try_thiem_head(
    discharge: f64,
    transmissivity: f64,
    reference_head: f64,
    well_radius: f64,
    r: f64,
) -> HeadEstimate {
    if transmissivity == 0.0 {
        return HeadEstimate::Undefined;
    }
    let slope = discharge / (2.0 * PI * transmissivity);
    HeadEstimate::Defined(reference_head - slope * (r / well_radius).ln())
}

/// Dupuit-Forchheimer head at radius `r`:
/// `sqrt(|h_ref² - Q · ln(r / rw) / (π K)|)`.
///
/// The radicand is taken in absolute value so extreme slider settings clamp
/// instead of producing NaN. Returns `0.0` when `conductivity == 0`.
pub fn dupuit_head(
    discharge: f64,
    conductivity: f64,
    reference_head: f64,
    well_radius: f64,
    r: f64,
) -> f64 {
    try_dupuit_head(discharge, conductivity, reference_head, well_radius, r).or_sentinel()
}

pub fn try_dupuit_head(
    discharge: f64,
    conductivity: f64,
    reference_head: f64,
    well_radius: f64,
    r: f64,
) -> HeadEstimate {
    if conductivity == 0.0 {
        return HeadEstimate::Undefined;
    }
    let radicand = reference_head * reference_head
        - discharge * (r / well_radius).ln() / (PI * conductivity);
    HeadEstimate::Defined(radicand.abs().sqrt())
}

/// Evaluate head at every radius, aligned index-for-index with `radii`.
pub fn evaluate(
    model: &AquiferModel,
    discharge: f64,
    reference_head: f64,
    well_radius: f64,
    radii: &[f64],
) -> Vec<f64> {
    match *model {
        AquiferModel::Confined { transmissivity } => radii
            .iter()
            .map(|&r| thiem_head(discharge, transmissivity, reference_head, well_radius, r))
            .collect(),
        AquiferModel::Unconfined { conductivity } => radii
            .iter()
            .map(|&r| dupuit_head(discharge, conductivity, reference_head, well_radius, r))
            .collect(),
    }
}

/// Derive the plotted drawdown from a head series whose last entry sits on
/// the outer boundary.
pub fn drawdown_series(heads: &[f64], mode: DrawdownMode) -> Vec<f64> {
    match mode {
        DrawdownMode::Raw => heads.iter().map(|h| h.abs()).collect(),
        DrawdownMode::Normalized => {
            let boundary = heads.last().map_or(0.0, |h| h.abs());
            heads.iter().map(|h| h.abs() - boundary).collect()
        }
    }
}
