use crate::error::ParameterError;
use crate::model::{drawdown_series, evaluate};
use crate::sampling::sample_radii;

use super::types::{DrawdownCurve, DrawdownInputs};

/// Validate, sample, evaluate, and derive drawdown in one pass.
pub fn build_curve(inputs: &DrawdownInputs) -> Result<DrawdownCurve, ParameterError> {
    let domain = inputs.validate()?;

    let radii = sample_radii(domain.well_radius, domain.outer_radius, inputs.sampling);
    let heads = evaluate(
        &inputs.model,
        inputs.discharge,
        inputs.reference_head,
        domain.well_radius,
        &radii,
    );
    let drawdown = drawdown_series(&heads, inputs.mode);

    Ok(DrawdownCurve {
        model: inputs.model,
        mode: inputs.mode,
        radii,
        heads,
        drawdown,
    })
}
