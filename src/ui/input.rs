use bevy::prelude::*;
use crate::shared::*;
use super::PanelButton;

/// What an intent does to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(GameState),
    /// Open the detail panel for a collection entry, no reveal delay.
    ShowEntry(SpeciesId),
}

/// Pure mapping from (state, intent) to a transition. Intents that make no
/// sense in the current state are ignored.
pub fn resolve_intent(
    state: GameState,
    intent: UiIntent,
    collection: &Collection,
) -> Option<Transition> {
    match (state, intent) {
        (GameState::Detail | GameState::Collection, UiIntent::Close) => {
            Some(Transition::To(GameState::Exploring))
        }
        (GameState::Exploring, UiIntent::ToggleCollection) => {
            Some(Transition::To(GameState::Collection))
        }
        (GameState::Collection, UiIntent::ToggleCollection) => {
            Some(Transition::To(GameState::Exploring))
        }
        (GameState::Collection, UiIntent::SelectEntry(index)) => {
            collection.get(index).map(Transition::ShowEntry)
        }
        _ => None,
    }
}

/// B toggles the collection; Escape closes whichever panel is open.
/// Escape while exploring belongs to the capture domain.
pub fn keyboard_intents(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut intents: EventWriter<UiIntent>,
) {
    let state = *state.get();

    if keyboard.just_pressed(KeyCode::KeyB)
        && matches!(state, GameState::Exploring | GameState::Collection)
    {
        intents.send(UiIntent::ToggleCollection);
    }
    if keyboard.just_pressed(KeyCode::Escape) && state.is_modal() {
        intents.send(UiIntent::Close);
    }
}

pub fn button_intents(
    buttons: Query<(&Interaction, &PanelButton), Changed<Interaction>>,
    mut intents: EventWriter<UiIntent>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        intents.send(match *button {
            PanelButton::Close => UiIntent::Close,
            PanelButton::Entry(index) => UiIntent::SelectEntry(index),
        });
    }
}

/// The single place UI intents become state transitions. Only the first
/// applicable intent per frame is honoured.
pub fn apply_ui_intents(
    mut commands: Commands,
    mut intents: EventReader<UiIntent>,
    state: Res<State<GameState>>,
    collection: Res<Collection>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let current = *state.get();
    let transition = intents
        .read()
        .find_map(|intent| resolve_intent(current, *intent, &collection));

    match transition {
        Some(Transition::To(target)) => next_state.set(target),
        Some(Transition::ShowEntry(species)) => {
            commands.insert_resource(DetailView::immediate(species));
            next_state.set(GameState::Detail);
        }
        None => {}
    }
}
