use bevy::prelude::*;
use crate::settings::Settings;
use crate::shared::*;

pub fn forward_vector(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

pub fn right_vector(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Displacement for one step of `distance` units per held key.
///
/// Keys add independently: opposing keys cancel and diagonals are not
/// normalised, so forward+right covers `distance * √2`.
pub fn movement_delta(intent: &MoveIntent, yaw: f32, distance: f32) -> Vec3 {
    let forward = forward_vector(yaw);
    let right = right_vector(yaw);
    let mut delta = Vec3::ZERO;

    if intent.forward {
        delta += forward * distance;
    }
    if intent.backward {
        delta -= forward * distance;
    }
    if intent.right {
        delta += right * distance;
    }
    if intent.left {
        delta -= right * distance;
    }
    delta
}

/// Mirrors held WASD / arrow keys into `MoveIntent`.
pub fn read_move_intent(keyboard: Res<ButtonInput<KeyCode>>, mut intent: ResMut<MoveIntent>) {
    let held = MoveIntent {
        forward: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
        backward: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
    };
    if *intent != held {
        *intent = held;
    }
}

/// Moves the camera by `move_speed * elapsed seconds` per held key.
/// No collision: the player walks through scenery.
pub fn apply_movement(
    time: Res<Time>,
    settings: Res<Settings>,
    intent: Res<MoveIntent>,
    mut query: Query<(&LookAngles, &mut Transform), With<Player>>,
) {
    if intent.is_idle() {
        return;
    }
    let Ok((angles, mut transform)) = query.get_single_mut() else {
        return;
    };

    let distance = settings.move_speed * time.delta_secs();
    transform.translation += movement_delta(&intent, angles.yaw, distance);
}

/// Drops any held keys when leaving Exploring so nothing stays latched
/// behind an open panel.
pub fn clear_move_intent(mut intent: ResMut<MoveIntent>) {
    *intent = MoveIntent::default();
}
