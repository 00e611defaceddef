use bevy_egui::{egui, EguiContexts};

/// Light theme: the chart is drawn on white, so panels match it.
pub fn apply_viewer_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let accent = egui::Color32::from_rgb(70, 140, 230);
    style.visuals.selection.bg_fill = accent.gamma_multiply(0.35);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    style.visuals.slider_trailing_fill = true;
    style.visuals.panel_fill = egui::Color32::from_rgb(246, 247, 250);

    let rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.slider_width = 220.0;

    ctx.set_style(style);
}
