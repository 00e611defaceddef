use bevy_egui::egui;

use drawdown::config::{AxisRange, ChartAxes};
use drawdown::DrawdownCurve;

use super::frame::{nice_ticks, PlotFrame};

const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(70, 140, 230);
const GRID_COLOR: egui::Color32 = egui::Color32::from_gray(215);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_gray(90);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_gray(60);

/// Space reserved around the plot area for tick labels and axis titles.
const MARGIN_LEFT: f32 = 48.0;
const MARGIN_BOTTOM: f32 = 36.0;
const MARGIN_TOP: f32 = 8.0;
const MARGIN_RIGHT: f32 = 12.0;

/// Draw `curve` as a line on fixed axes: x from `axes.radius_min` to the
/// outer radius, y from the per-model drawdown range.
pub(crate) fn draw_drawdown_chart(
    ui: &mut egui::Ui,
    curve: &DrawdownCurve,
    axes: &ChartAxes,
    outer_radius: f64,
    size: egui::Vec2,
) {
    let (outer, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(outer);
    painter.rect_filled(outer, 4.0, egui::Color32::WHITE);

    let plot_rect = egui::Rect::from_min_max(
        egui::pos2(outer.min.x + MARGIN_LEFT, outer.min.y + MARGIN_TOP),
        egui::pos2(outer.max.x - MARGIN_RIGHT, outer.max.y - MARGIN_BOTTOM),
    );
    let y_range = if curve.model.is_confined() {
        axes.confined_drawdown
    } else {
        axes.unconfined_drawdown
    };
    let frame = PlotFrame::new(
        plot_rect,
        AxisRange::new(axes.radius_min, outer_radius),
        y_range,
    );

    draw_grid(&painter, &frame);

    // Curve, clipped to the plot area so fixed y ranges can cut it off.
    let points: Vec<egui::Pos2> = curve
        .points()
        .map(|(r, s)| frame.to_screen(r, s))
        .collect();
    if points.len() >= 2 {
        ui.painter_at(plot_rect)
            .add(egui::Shape::line(points, egui::Stroke::new(2.0, CURVE_COLOR)));
    }

    // Axis titles
    let font = egui::FontId::proportional(12.0);
    painter.text(
        egui::pos2(plot_rect.center().x, outer.max.y - 4.0),
        egui::Align2::CENTER_BOTTOM,
        "r (m)",
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        egui::pos2(plot_rect.min.x + 4.0, plot_rect.min.y + 2.0),
        egui::Align2::LEFT_TOP,
        "drawdown, s (m)",
        font,
        LABEL_COLOR,
    );

    if let Some(pos) = response.hover_pos() {
        if plot_rect.contains(pos) {
            draw_hover(ui, &frame, curve, pos);
        }
    }
}

fn draw_grid(painter: &egui::Painter, frame: &PlotFrame) {
    let rect = frame.rect;
    let tick_font = egui::FontId::proportional(10.0);
    let thin = egui::Stroke::new(0.5, GRID_COLOR);

    for x in nice_ticks(frame.x.min, frame.x.max, 8) {
        let p = frame.to_screen(x, frame.y.min);
        painter.line_segment([egui::pos2(p.x, rect.min.y), egui::pos2(p.x, rect.max.y)], thin);
        painter.text(
            egui::pos2(p.x, rect.max.y + 3.0),
            egui::Align2::CENTER_TOP,
            tick_label(x),
            tick_font.clone(),
            LABEL_COLOR,
        );
    }

    for y in nice_ticks(frame.y.min, frame.y.max, 6) {
        let p = frame.to_screen(frame.x.min, y);
        painter.line_segment([egui::pos2(rect.min.x, p.y), egui::pos2(rect.max.x, p.y)], thin);
        painter.text(
            egui::pos2(rect.min.x - 4.0, p.y),
            egui::Align2::RIGHT_CENTER,
            tick_label(y),
            tick_font.clone(),
            LABEL_COLOR,
        );
    }

    let axis = egui::Stroke::new(1.0, AXIS_COLOR);
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], axis);
    painter.line_segment([rect.left_bottom(), rect.left_top()], axis);
}

/// Marker and readout for the sample nearest the pointer.
fn draw_hover(ui: &egui::Ui, frame: &PlotFrame, curve: &DrawdownCurve, pos: egui::Pos2) {
    let (r, _) = frame.to_data(pos);
    let Some((r, s)) = curve.nearest(r) else {
        return;
    };

    let painter = ui.painter_at(frame.rect);
    let marker = frame.to_screen(r, s);
    painter.circle_filled(marker, 4.0, CURVE_COLOR);

    let align = if marker.x > frame.rect.center().x {
        egui::Align2::RIGHT_BOTTOM
    } else {
        egui::Align2::LEFT_BOTTOM
    };
    painter.text(
        marker + egui::vec2(0.0, -8.0),
        align,
        format!("r = {r:.2} m\ns = {s:.3} m"),
        egui::FontId::monospace(11.0),
        LABEL_COLOR,
    );
}

/// Tick value without float noise such as `0.6000000000000001`.
fn tick_label(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
