//! Individual sections of the drawdown panel.

use bevy_egui::egui;

use drawdown::constants::{
    CONDUCTIVITY_EXPONENT_RANGE, DISCHARGE_RANGE, OUTER_RADIUS_RANGE, OUTER_RADIUS_STEP,
    TRANSMISSIVITY_EXPONENT_RANGE, WELL_RADIUS,
};
use drawdown::{DrawdownMode, SamplingPolicy};

use super::types::{AquiferTab, ControlState};

pub(crate) fn render_tabs(ui: &mut egui::Ui, controls: &mut ControlState) {
    ui.horizontal(|ui| {
        for tab in AquiferTab::ALL {
            if ui.selectable_label(controls.tab == tab, tab.label()).clicked() {
                controls.tab = tab;
            }
        }
    });
}

pub(crate) fn render_sliders(ui: &mut egui::Ui, controls: &mut ControlState) {
    ui.label(egui::RichText::new("Well Discharge (Q) (m³/d):").strong());
    ui.add(
        egui::Slider::new(&mut controls.discharge, DISCHARGE_RANGE.0..=DISCHARGE_RANGE.1)
            .step_by(1.0)
            .max_decimals(2),
    );

    ui.add_space(6.0);
    match controls.tab {
        AquiferTab::Confined => {
            ui.label(egui::RichText::new("Aquifer Transmissivity (T) (m²/d):").strong());
            ui.add(log_slider(
                &mut controls.transmissivity_exponent,
                TRANSMISSIVITY_EXPONENT_RANGE,
            ));
        }
        AquiferTab::Unconfined => {
            ui.label(egui::RichText::new("Hydraulic Conductivity (K) (m/d):").strong());
            ui.add(log_slider(
                &mut controls.conductivity_exponent,
                CONDUCTIVITY_EXPONENT_RANGE,
            ));
        }
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Outer Radius (r₂) (m):").strong());
    ui.add(
        egui::Slider::new(
            &mut controls.outer_radius,
            OUTER_RADIUS_RANGE.0..=OUTER_RADIUS_RANGE.1,
        )
        .step_by(OUTER_RADIUS_STEP),
    );
}

/// Slider over a log10 exponent that displays the physical value.
fn log_slider(exponent: &mut f64, range: (f64, f64)) -> egui::Slider<'_> {
    egui::Slider::new(exponent, range.0..=range.1)
        .step_by(0.01)
        .custom_formatter(|v, _| format_magnitude(10f64.powf(v)))
        .custom_parser(|s| s.trim().parse::<f64>().ok().filter(|v| *v > 0.0).map(f64::log10))
}

pub(crate) fn format_magnitude(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0}")
    } else if value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.3}")
    }
}

pub(crate) fn render_display_options(ui: &mut egui::Ui, controls: &mut ControlState) {
    ui.collapsing("Display", |ui| {
        ui.label("Drawdown:");
        for mode in [DrawdownMode::Normalized, DrawdownMode::Raw] {
            if ui.radio(controls.mode == mode, mode.label()).clicked() {
                controls.mode = mode;
            }
        }

        ui.add_space(4.0);
        ui.label("Sampling:");
        for policy in [SamplingPolicy::two_tier(), SamplingPolicy::uniform()] {
            let selected = std::mem::discriminant(&controls.sampling)
                == std::mem::discriminant(&policy);
            if ui.radio(selected, policy.label()).clicked() {
                controls.sampling = policy;
            }
        }
    });
}

pub(crate) fn render_equation(ui: &mut egui::Ui, tab: AquiferTab) {
    let text = match tab {
        AquiferTab::Confined => "h₂ − h₁ = Q / (2πT) · ln(r₂ / r₁)",
        AquiferTab::Unconfined => "h₂² − h₁² = Q / (πK) · ln(r₂ / r₁)",
    };
    ui.label(egui::RichText::new(text).monospace().size(14.0));
}

pub(crate) fn render_well_note(ui: &mut egui::Ui) {
    ui.small(format!("The well radius (rw) is {WELL_RADIUS}m."));
}
