//! Mapping between data space (radius, drawdown) and screen space.

use bevy_egui::egui;

use drawdown::config::AxisRange;

/// A screen rectangle paired with the data ranges it displays.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlotFrame {
    pub rect: egui::Rect,
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotFrame {
    pub(crate) fn new(rect: egui::Rect, x: AxisRange, y: AxisRange) -> Self {
        Self { rect, x, y }
    }

    /// Data point to screen position. Larger y is drawn higher up.
    pub(crate) fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        let tx = ((x - self.x.min) / self.x.span().max(f64::EPSILON)) as f32;
        let ty = ((y - self.y.min) / self.y.span().max(f64::EPSILON)) as f32;
        egui::pos2(
            self.rect.min.x + tx * self.rect.width(),
            self.rect.max.y - ty * self.rect.height(),
        )
    }

    /// Screen position back to data coordinates.
    pub(crate) fn to_data(&self, pos: egui::Pos2) -> (f64, f64) {
        let tx = ((pos.x - self.rect.min.x) / self.rect.width().max(f32::EPSILON)) as f64;
        let ty = ((self.rect.max.y - pos.y) / self.rect.height().max(f32::EPSILON)) as f64;
        (
            self.x.min + tx * self.x.span(),
            self.y.min + ty * self.y.span(),
        )
    }
}

/// Round tick positions (1, 2, or 5 × 10ⁿ spacing) covering `[min, max]`,
/// aiming for about `target` ticks.
pub(crate) fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span > 0.0) || target == 0 {
        return Vec::new();
    }

    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
