use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use crate::settings::Settings;
use crate::shared::*;

const FOG_COLOR: u32 = 0xfff4e6;
const FOG_START: f32 = 30.0;
const FOG_END: f32 = 50.0;

/// Spawn the first-person camera at the configured spawn point.
pub fn spawn_player(
    mut commands: Commands,
    settings: Res<Settings>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        return;
    }

    let angles = LookAngles::default();

    commands.spawn((
        Name::new("Player camera"),
        Player,
        angles,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.field_of_view_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        DistanceFog {
            color: hex_color(FOG_COLOR),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        Transform::from_translation(settings.spawn_position())
            .with_rotation(super::look_rotation(&angles)),
    ));
}
