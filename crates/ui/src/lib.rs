use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use drawdown::config::ViewerConfig;
use drawdown::curve::recompute_drawdown_curve;

pub mod about_panel;
mod chart;
pub mod controls;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<ViewerConfig>()
            .init_resource::<controls::ControlState>()
            .init_resource::<about_panel::AboutPanelVisible>()
            .add_systems(Startup, theme::apply_viewer_theme)
            .add_systems(
                Update,
                (
                    (controls::drawdown_panel_ui, controls::apply_controls)
                        .chain()
                        .before(recompute_drawdown_curve),
                    about_panel::about_panel_keybind,
                    about_panel::about_panel_ui,
                ),
            );
    }
}
