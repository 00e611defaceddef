use bevy::prelude::*;

use super::calculations::build_curve;
use super::types::{DrawdownCurveState, DrawdownInputs};

/// System: rebuild the curve from the current inputs.
///
/// Invalid inputs keep the previous curve on screen and record the error so
/// the UI can show it.
pub fn recompute_drawdown_curve(inputs: Res<DrawdownInputs>, mut state: ResMut<DrawdownCurveState>) {
    match build_curve(&inputs) {
        Ok(curve) => {
            debug!(
                "Drawdown curve rebuilt: {} samples, max drawdown {:.3} m",
                curve.len(),
                curve.max_drawdown()
            );
            state.curve = Some(curve);
            state.error = None;
            state.revision += 1;
        }
        Err(e) => {
            warn!("Rejected drawdown inputs: {e}");
            state.error = Some(e);
        }
    }
}

pub struct DrawdownPlugin;

impl Plugin for DrawdownPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawdownInputs>()
            .init_resource::<DrawdownCurveState>()
            .add_systems(
                Update,
                recompute_drawdown_curve.run_if(resource_changed::<DrawdownInputs>),
            );
    }
}
