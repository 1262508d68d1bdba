//! Catch resolution.
//!
//! `record_catch` owns the bookkeeping (collection, detail panel, state);
//! `spawn_catch_splash` is the cosmetic half and needs render assets, so it
//! lives in its own system.

use bevy::prelude::*;

use crate::settings::Settings;
use crate::shared::*;
use super::splash::{Splash, SPLASH_OFFSET, SPLASH_RADIUS, SPLASH_START_OPACITY};

/// Appends each caught fish to the collection and opens the detail panel
/// after the reveal delay. Entering Detail releases the pointer.
pub fn record_catch(
    mut commands: Commands,
    mut caught_events: EventReader<FishCaughtEvent>,
    mut collection: ResMut<Collection>,
    catalog: Res<FishCatalog>,
    settings: Res<Settings>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in caught_events.read() {
        let Some(species) = catalog.get(event.species) else {
            warn!("[Fishing] Caught unknown species id {:?}", event.species);
            continue;
        };

        collection.add(event.species);
        info!(
            "[Fishing] Caught {} ({}). Collection size: {}",
            species.name,
            species.rarity,
            collection.count()
        );

        commands.insert_resource(DetailView::delayed(
            event.species,
            settings.reveal_delay_secs,
        ));
        next_state.set(GameState::Detail);
    }
}

pub fn spawn_catch_splash(
    mut commands: Commands,
    mut caught_events: EventReader<FishCaughtEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for _ in caught_events.read() {
        let material = materials.add(StandardMaterial {
            base_color: hex_color(0x87CEEB).with_alpha(SPLASH_START_OPACITY),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        commands.spawn((
            Name::new("Splash"),
            Splash::default(),
            Mesh3d(meshes.add(Sphere::new(SPLASH_RADIUS))),
            MeshMaterial3d(material),
            Transform::from_translation(POOL_POSITION + SPLASH_OFFSET),
        ));
    }
}
