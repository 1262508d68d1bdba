use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use crate::settings::Settings;
use crate::shared::*;

/// Pitch is clamped to straight up / straight down.
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Apply one mouse-motion delta (pixels) to the view angles.
pub fn apply_look_delta(angles: &mut LookAngles, delta: Vec2, sensitivity: f32) {
    angles.yaw -= delta.x * sensitivity;
    angles.pitch = (angles.pitch - delta.y * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

/// Yaw about Y first, then pitch about the rotated X axis.
pub fn look_rotation(angles: &LookAngles) -> Quat {
    Quat::from_euler(EulerRot::YXZ, angles.yaw, angles.pitch, 0.0)
}

/// Reads every pending mouse-motion event. Motion that arrives while the
/// pointer is not captured is consumed and discarded so it can't drift the
/// view once capture resumes.
pub fn apply_mouse_look(
    capture: Res<PointerCapture>,
    settings: Res<Settings>,
    mut motion: EventReader<MouseMotion>,
    mut query: Query<&mut LookAngles, With<Player>>,
) {
    let delta: Vec2 = motion.read().map(|event| event.delta).sum();

    if !capture.engaged || delta == Vec2::ZERO {
        return;
    }
    let Ok(mut angles) = query.get_single_mut() else {
        return;
    };

    apply_look_delta(&mut angles, delta, settings.look_sensitivity);
}

pub fn sync_camera_rotation(
    mut query: Query<(&LookAngles, &mut Transform), (With<Player>, Changed<LookAngles>)>,
) {
    for (angles, mut transform) in &mut query {
        transform.rotation = look_rotation(angles);
    }
}
