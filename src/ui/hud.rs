use bevy::prelude::*;
use super::PANEL_ACCENT;

const CROSSHAIR_SIZE: f32 = 6.0;

#[derive(Component)]
pub struct Crosshair;

#[derive(Component)]
pub struct CaptureHint;

/// Small dot at the exact viewport centre, where the catch ray goes.
pub fn spawn_crosshair(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            GlobalZIndex(5),
        ))
        .with_children(|parent| {
            parent.spawn((
                Crosshair,
                Node {
                    width: Val::Px(CROSSHAIR_SIZE + 4.0),
                    height: Val::Px(CROSSHAIR_SIZE + 4.0),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(PANEL_ACCENT),
                BorderColor(Color::WHITE),
                BorderRadius::MAX,
            ));
        });
}

pub fn spawn_capture_hint(mut commands: Commands) {
    commands.spawn((
        CaptureHint,
        Text::new("Click to explore  |  WASD: move  |  Click the pool: fish  |  B: collection"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(PANEL_ACCENT),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(40.0),
            left: Val::Px(40.0),
            ..default()
        },
    ));
}

pub fn despawn_capture_hint(mut commands: Commands, query: Query<Entity, With<CaptureHint>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
