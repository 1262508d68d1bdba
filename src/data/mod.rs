//! Data layer: populates the fish catalog at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the FishCatalog from
//! the hard-coded encyclopedia in `fish.rs`, validates it, then transitions the
//! game into GameState::Uncaptured.
//!
//! A catalog that fails validation (a rarity tier with no species) stops the
//! app here instead of surfacing later as a bad draw in the catch path.

mod fish;

use bevy::prelude::*;
use crate::shared::*;

pub use fish::populate_fish;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// The built-in encyclopedia, already validated by the tests below.
pub fn standard_catalog() -> FishCatalog {
    let mut catalog = FishCatalog::default();
    populate_fish(&mut catalog);
    catalog
}

fn load_all_data(
    mut catalog: ResMut<FishCatalog>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    info!("[Data] Populating fish catalog…");

    populate_fish(&mut catalog);
    for rarity in Rarity::ALL {
        info!("  {}: {} species", rarity, catalog.tier(rarity).len());
    }

    if let Err(e) = catalog.validate() {
        error!("[Data] Invalid fish catalog: {}", e);
        exit.send(AppExit::error());
        return;
    }

    info!("[Data] {} species loaded. Transitioning to Uncaptured.", catalog.len());
    next_state.set(GameState::Uncaptured);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = standard_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn test_standard_catalog_tiers() {
        let catalog = standard_catalog();
        for rarity in Rarity::ALL {
            assert_eq!(catalog.tier(rarity).len(), 2, "{} tier", rarity);
        }
    }

    #[test]
    fn test_populate_replaces_previous_contents() {
        let mut catalog = standard_catalog();
        populate_fish(&mut catalog);
        assert_eq!(catalog.len(), 8);
    }
}
