use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use drawdown::config::ViewerConfig;

mod headless;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = arg_value(&args, "--config").map(PathBuf::from);

    if args.iter().any(|a| a == "--headless") {
        let code = headless::run_headless_mode(config_path.as_deref());
        std::process::exit(code);
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Well Drawdown Explorer".to_string(),
            resolution: (1250.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(250)),
    })
    .insert_resource(ClearColor(Color::srgb(0.96, 0.97, 0.98)));

    // Loaded after DefaultPlugins so the LogPlugin reports config problems.
    let config = ViewerConfig::load_or_default(config_path.as_deref());
    app.insert_resource(config.inputs)
        .insert_resource(config)
        .add_plugins((drawdown::DrawdownPlugin, ui::UiPlugin))
        .add_systems(Startup, spawn_camera);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Value following `flag`, e.g. `--config path.json`.
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
