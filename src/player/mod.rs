mod capture;
mod look;
mod movement;
mod spawn;

use bevy::prelude::*;
use crate::shared::*;

pub use capture::{
    apply_cursor_grab, detect_capture_loss, engage_capture, release_capture,
    request_capture_on_click,
};
pub use look::{apply_look_delta, apply_mouse_look, look_rotation, sync_camera_rotation, PITCH_LIMIT};
pub use movement::{
    apply_movement, clear_move_intent, forward_vector, movement_delta, read_move_intent,
    right_vector,
};
pub use spawn::spawn_player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_player);

        // -- Pointer capture lifecycle --
        app.add_systems(
            Update,
            capture::request_capture_on_click.run_if(in_state(GameState::Uncaptured)),
        );
        app.add_systems(OnEnter(GameState::Exploring), capture::engage_capture);
        app.add_systems(
            OnExit(GameState::Exploring),
            (capture::release_capture, movement::clear_move_intent),
        );
        app.add_systems(Update, capture::detect_capture_loss);
        app.add_systems(PostUpdate, capture::apply_cursor_grab);

        // -- Look drains mouse motion every frame; it only turns the camera
        // while capture is engaged.
        app.add_systems(
            Update,
            (look::apply_mouse_look, look::sync_camera_rotation).chain(),
        );

        // -- Movement, frozen whenever a panel is open --
        app.add_systems(
            Update,
            (movement::read_move_intent, movement::apply_movement)
                .chain()
                .after(look::apply_mouse_look)
                .run_if(in_state(GameState::Exploring)),
        );
    }
}
