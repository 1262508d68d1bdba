mod collection_screen;
mod detail_panel;
mod hud;
mod input;

use bevy::prelude::*;
use crate::shared::*;

pub use collection_screen::{
    CollectionCard, CollectionCardName, CollectionEmptyMessage, CollectionScreenRoot,
    CollectionTitle, CollectionViewModel, CardViewModel, EMPTY_COLLECTION_MESSAGE,
};
pub use detail_panel::{DetailPanelRoot, DetailTitle, DetailViewModel};
pub use input::{apply_ui_intents, resolve_intent, Transition};

// ═══════════════════════════════════════════════════════════════════════
// SHARED UI PIECES
// ═══════════════════════════════════════════════════════════════════════

/// A clickable control on one of the panels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Close,
    /// A collection card; carries the entry's position in catch order.
    Entry(usize),
}

pub(crate) const PANEL_BG: Color = Color::srgba(1.0, 0.973, 0.922, 0.98);
pub(crate) const PANEL_TEXT: Color = Color::srgb(0.243, 0.153, 0.137);
pub(crate) const PANEL_ACCENT: Color = Color::srgb(0.545, 0.435, 0.278);
pub(crate) const PANEL_MUTED: Color = Color::srgb(0.4, 0.4, 0.4);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── HUD ───
        app.add_systems(Startup, hud::spawn_crosshair);
        app.add_systems(OnEnter(GameState::Uncaptured), hud::spawn_capture_hint);
        app.add_systems(OnExit(GameState::Uncaptured), hud::despawn_capture_hint);

        // ─── INPUT → INTENTS → STATE ───
        app.add_systems(
            Update,
            (
                input::keyboard_intents,
                input::button_intents,
                input::apply_ui_intents,
            )
                .chain(),
        );

        // ─── DETAIL PANEL ───
        app.add_systems(OnEnter(GameState::Detail), detail_panel::spawn_detail_panel);
        app.add_systems(OnExit(GameState::Detail), detail_panel::despawn_detail_panel);
        app.add_systems(
            Update,
            detail_panel::reveal_detail_panel.run_if(in_state(GameState::Detail)),
        );

        // ─── COLLECTION SCREEN ───
        app.add_systems(
            OnEnter(GameState::Collection),
            collection_screen::spawn_collection_screen,
        );
        app.add_systems(
            OnExit(GameState::Collection),
            collection_screen::despawn_collection_screen,
        );
        app.add_systems(
            Update,
            (
                collection_screen::highlight_hovered_cards,
                collection_screen::scroll_collection,
            )
                .run_if(in_state(GameState::Collection)),
        );
    }
}

/// Rounded pill button used by both panels.
pub(crate) fn spawn_panel_button(parent: &mut ChildBuilder, label: &str) {
    parent
        .spawn((
            Button,
            PanelButton::Close,
            Node {
                align_self: AlignSelf::Center,
                padding: UiRect::axes(Val::Px(30.0), Val::Px(12.0)),
                margin: UiRect::top(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(PANEL_ACCENT),
            BorderRadius::all(Val::Px(25.0)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}
