use bevy::prelude::*;

use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
mod catch;
mod loot;
mod raycast;
mod splash;

pub use catch::*;
pub use loot::*;
pub use raycast::*;
pub use splash::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct FishingPlugin;

impl Plugin for FishingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Click → raycast → catch. Only the raycast is gated on Exploring;
            // catch handlers must see every event they are sent. Runs after
            // the UI intents so a catch wins over a same-frame panel toggle.
            .add_systems(
                Update,
                (
                    raycast::try_catch_on_click.run_if(in_state(GameState::Exploring)),
                    (catch::record_catch, catch::spawn_catch_splash),
                )
                    .chain()
                    .after(crate::ui::apply_ui_intents),
            )
            // Splashes keep animating behind open panels
            .add_systems(Update, splash::animate_splashes);
    }
}
