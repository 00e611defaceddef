//! Drawdown panel systems.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use drawdown::config::ViewerConfig;
use drawdown::{DrawdownCurveState, DrawdownInputs};

use crate::chart::draw_drawdown_chart;

use super::panels;
use super::types::ControlState;

/// Copy slider positions into `DrawdownInputs`, touching the resource only
/// when a value actually differs so the curve is not rebuilt every frame.
pub fn apply_controls(controls: Res<ControlState>, mut inputs: ResMut<DrawdownInputs>) {
    let next = controls.to_inputs(&inputs);
    if inputs.set_if_neq(next) {
        debug!("Drawdown inputs updated from controls: {:?}", next.model);
    }
}

/// Controls in a right side panel, chart in the central panel.
pub fn drawdown_panel_ui(
    mut contexts: EguiContexts,
    mut controls: ResMut<ControlState>,
    state: Res<DrawdownCurveState>,
    config: Res<ViewerConfig>,
) {
    let ctx = contexts.ctx_mut();

    // Edit a copy so the resource is only marked changed on real edits.
    let mut edited = controls.clone();

    egui::SidePanel::right("drawdown_controls")
        .resizable(false)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            ui.heading("Parameters");
            ui.separator();

            panels::render_sliders(ui, &mut edited);

            ui.add_space(8.0);
            ui.separator();
            panels::render_display_options(ui, &mut edited);

            ui.add_space(8.0);
            ui.separator();
            panels::render_well_note(ui);
            ui.small("Press [F1] for background and sources");
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        panels::render_tabs(ui, &mut edited);
        ui.separator();

        ui.heading(edited.tab.chart_title());
        panels::render_equation(ui, edited.tab);

        if let Some(err) = &state.error {
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), err.to_string());
        }

        match &state.curve {
            Some(curve) => {
                let size = egui::vec2(
                    ui.available_width(),
                    ui.available_height().max(240.0),
                );
                draw_drawdown_chart(ui, curve, &config.axes, edited.outer_radius, size);
            }
            None => {
                ui.label("No curve yet...");
            }
        }
    });

    if *controls != edited {
        *controls = edited;
    }
}
