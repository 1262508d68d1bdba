mod shared;
mod settings;
mod data;
mod world;
mod player;
mod fishing;
mod ui;

use bevy::prelude::*;
use bevy::window::PresentMode;

use shared::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Reef Catch".into(),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                #[cfg(target_arch = "wasm32")]
                canvas: Some("#reefcatch".into()),
                #[cfg(target_arch = "wasm32")]
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }))
        // Session state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<FishCatalog>()
        .init_resource::<Collection>()
        .init_resource::<MoveIntent>()
        .init_resource::<PointerCapture>()
        // Events
        .add_event::<FishCaughtEvent>()
        .add_event::<UiIntent>()
        .add_event::<CaptureLostEvent>()
        // Settings first: the other plugins read them at startup
        .add_plugins(settings::SettingsPlugin)
        // Domain plugins
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(fishing::FishingPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
