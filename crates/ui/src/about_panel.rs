//! Background and sources window, toggled with F1.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Whether the about window is visible.
#[derive(Resource, Default)]
pub struct AboutPanelVisible(pub bool);

const INTRODUCTION: &str = "\
Pumping a well lowers the hydraulic head around it, forming a cone of \
depression. Once pumping has continued long enough, the cone stops growing \
and the flow reaches steady state. Drawdown s is the difference between the \
head at the outer radius r₂ and the head at distance r from the well.";

const CONFINED_NOTES: &str = "\
Confined aquifer (Thiem): the aquifer is bounded above and below by \
impermeable layers, so the saturated thickness stays constant and head \
falls off with ln(r). Transmissivity T = K·b sets how steep the cone is.";

const UNCONFINED_NOTES: &str = "\
Unconfined aquifer (Dupuit-Forchheimer): the water table itself is the upper \
boundary, so the saturated thickness shrinks as head drops. The equation is \
written in h², assuming flow is horizontal and uniform with depth.";

const SOURCES: &[&str] = &[
    "Thiem, G. (1906). Hydrologische Methoden. Leipzig: J.M. Gebhardt.",
    "Dupuit, J. (1863). Études théoriques et pratiques sur le mouvement des eaux. Paris: Dunod.",
    "Forchheimer, P. (1886). Über die Ergiebigkeit von Brunnen-Anlagen und Sickerschlitzen.",
    "Fetter, C.W. (2001). Applied Hydrogeology, 4th ed. Prentice Hall.",
];

/// Toggles the about window with F1.
pub fn about_panel_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<AboutPanelVisible>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
}

pub fn about_panel_ui(mut contexts: EguiContexts, mut visible: ResMut<AboutPanelVisible>) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("About")
        .open(&mut open)
        .default_width(420.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(INTRODUCTION);
            ui.add_space(6.0);
            ui.label(CONFINED_NOTES);
            ui.add_space(6.0);
            ui.label(UNCONFINED_NOTES);

            ui.separator();
            ui.heading("Sources");
            for source in SOURCES {
                ui.small(*source);
            }
        });

    if !open {
        visible.0 = false;
    }
}
