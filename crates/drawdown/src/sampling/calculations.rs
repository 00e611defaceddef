use crate::constants::{BOUNDARY_TOLERANCE, UNIFORM_START_DIVISOR};

use super::types::SamplingPolicy;

/// Produce the strictly increasing radii at which head is evaluated.
///
/// Expects `0 < rw < r2`; the caller validates the domain. The first sample is
/// `>= rw` and the last sample is exactly `r2` for every policy.
pub fn sample_radii(rw: f64, r2: f64, policy: SamplingPolicy) -> Vec<f64> {
    match policy {
        SamplingPolicy::Uniform { count } => uniform_radii(rw, r2, count),
        SamplingPolicy::TwoTier {
            fine_step,
            transition_radius,
            coarse_step,
        } => two_tier_radii(rw, r2, fine_step, transition_radius, coarse_step),
    }
}

/// `count` evenly spaced values over `[rw + r2/1000, r2]`, last pinned to `r2`.
pub(crate) fn uniform_radii(rw: f64, r2: f64, count: usize) -> Vec<f64> {
    let start = rw + r2 / UNIFORM_START_DIVISOR;
    if count <= 1 || start >= r2 {
        return vec![r2];
    }

    let span = r2 - start;
    let last = count - 1;
    let mut radii: Vec<f64> = (0..last)
        .map(|i| start + span * (i as f64 / last as f64))
        .collect();
    radii.push(r2);
    radii
}

/// Fine samples from `rw` below the transition, coarse samples from the
/// transition below `r2`, then `r2` itself.
pub(crate) fn two_tier_radii(
    rw: f64,
    r2: f64,
    fine_step: f64,
    transition_radius: f64,
    coarse_step: f64,
) -> Vec<f64> {
    let fine_end = transition_radius.min(r2);
    let mut radii = Vec::new();

    append_tier(&mut radii, rw, fine_end, fine_step);
    if transition_radius < r2 {
        let coarse_start = transition_radius.max(rw);
        append_tier(&mut radii, coarse_start, r2, coarse_step);
    }

    radii.push(r2);
    radii
}

/// Push `start + i * step` for every value strictly below `end` (minus a
/// tolerance) and strictly above the last value already present.
fn append_tier(radii: &mut Vec<f64>, start: f64, end: f64, step: f64) {
    let limit = end - step * BOUNDARY_TOLERANCE;
    let mut i = 0usize;
    loop {
        let r = start + step * i as f64;
        if r >= limit {
            break;
        }
        if radii.last().map_or(true, |&prev| r > prev) {
            radii.push(r);
        }
        i += 1;
    }
}
