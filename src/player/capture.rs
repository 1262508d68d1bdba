//! Pointer capture (pointer lock) lifecycle.
//!
//! `PointerCapture` is the source of truth; the primary window's cursor grab
//! only mirrors it, so the rest of the game never needs a window to exist.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow, WindowFocused};
use crate::shared::*;

/// Browsers and macOS can lock the cursor in place; elsewhere winit only
/// supports confining it, which still yields relative motion.
#[cfg(any(target_arch = "wasm32", target_os = "macos"))]
const CAPTURED_GRAB_MODE: CursorGrabMode = CursorGrabMode::Locked;
#[cfg(not(any(target_arch = "wasm32", target_os = "macos")))]
const CAPTURED_GRAB_MODE: CursorGrabMode = CursorGrabMode::Confined;

/// A primary click anywhere while uncaptured grabs the pointer. The click
/// itself is not a catch attempt.
pub fn request_capture_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        next_state.set(GameState::Exploring);
    }
}

pub fn engage_capture(mut capture: ResMut<PointerCapture>) {
    capture.engaged = true;
    info!("[Capture] Pointer captured");
}

pub fn release_capture(mut capture: ResMut<PointerCapture>) {
    capture.engaged = false;
    info!("[Capture] Pointer released");
}

/// Escape or focus loss drops capture and returns to Uncaptured.
///
/// Focus events are drained every frame so a stale focus loss can't eject
/// the player right after they re-capture.
pub fn detect_capture_loss(
    state: Res<State<GameState>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut focus_events: EventReader<WindowFocused>,
    mut lost_events: EventWriter<CaptureLostEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let focus_lost = focus_events.read().any(|event| !event.focused);

    if *state.get() != GameState::Exploring {
        return;
    }
    if focus_lost || keyboard.just_pressed(KeyCode::Escape) {
        lost_events.send(CaptureLostEvent);
        next_state.set(GameState::Uncaptured);
    }
}

/// Mirrors `PointerCapture` onto the primary window's cursor.
pub fn apply_cursor_grab(
    capture: Res<PointerCapture>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !capture.is_changed() {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    if capture.engaged {
        window.cursor_options.grab_mode = CAPTURED_GRAB_MODE;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}
