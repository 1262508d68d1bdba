use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use crate::shared::*;
use super::{spawn_panel_button, PanelButton, PANEL_ACCENT, PANEL_BG, PANEL_MUTED};

pub const EMPTY_COLLECTION_MESSAGE: &str = "Your collection is empty! Go catch some fish!";

const CARD_BG: Color = Color::WHITE;
const CARD_BG_HOVER: Color = Color::srgb(0.98, 0.95, 0.88);
const SCROLL_LINE_PX: f32 = 24.0;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct CollectionScreenRoot;

#[derive(Component)]
pub struct CollectionTitle;

#[derive(Component)]
pub struct CollectionEmptyMessage;

#[derive(Component)]
pub struct CollectionGrid;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCard {
    pub index: usize,
}

#[derive(Component)]
pub struct CollectionCardName;

// ═══════════════════════════════════════════════════════════════════════
// VIEW MODEL
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    /// Position in catch order.
    pub index: usize,
    pub name: String,
    pub scientific_name: String,
    pub rarity: Rarity,
    pub swatch: u32,
    /// Border and rarity-label tint.
    pub tint: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionViewModel {
    pub title: String,
    pub empty_message: Option<&'static str>,
    pub cards: Vec<CardViewModel>,
}

impl CollectionViewModel {
    pub fn new(collection: &Collection, catalog: &FishCatalog) -> Self {
        if collection.is_empty() {
            return Self {
                title: "My Fish Collection".to_string(),
                empty_message: Some(EMPTY_COLLECTION_MESSAGE),
                cards: Vec::new(),
            };
        }

        let cards = collection
            .all()
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                catalog.get(*id).map(|species| CardViewModel {
                    index,
                    name: species.name.clone(),
                    scientific_name: species.scientific_name.clone(),
                    rarity: species.rarity,
                    swatch: species.color,
                    tint: species.rarity.ui_color_hex(),
                })
            })
            .collect();

        Self {
            title: format!("My Fish Collection ({} fish)", collection.count()),
            empty_message: None,
            cards,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_collection_screen(
    mut commands: Commands,
    collection: Res<Collection>,
    catalog: Res<FishCatalog>,
) {
    let view = CollectionViewModel::new(&collection, &catalog);

    commands
        .spawn((
            CollectionScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Percent(80.0),
                        max_width: Val::Px(900.0),
                        max_height: Val::Vh(85.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(30.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_BG),
                    BorderColor(PANEL_ACCENT),
                    BorderRadius::all(Val::Px(20.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        CollectionTitle,
                        Text::new(view.title.clone()),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(PANEL_ACCENT),
                        Node {
                            margin: UiRect::bottom(Val::Px(20.0)),
                            ..default()
                        },
                    ));

                    if let Some(message) = view.empty_message {
                        panel.spawn((
                            CollectionEmptyMessage,
                            Text::new(message),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(PANEL_MUTED),
                            Node {
                                align_self: AlignSelf::Center,
                                padding: UiRect::all(Val::Px(50.0)),
                                ..default()
                            },
                        ));
                    } else {
                        panel
                            .spawn((
                                CollectionGrid,
                                Node {
                                    display: Display::Grid,
                                    grid_template_columns: RepeatedGridTrack::flex(3, 1.0),
                                    row_gap: Val::Px(20.0),
                                    column_gap: Val::Px(20.0),
                                    overflow: Overflow::scroll_y(),
                                    ..default()
                                },
                                ScrollPosition::default(),
                            ))
                            .with_children(|grid| {
                                for card in &view.cards {
                                    spawn_card(grid, card);
                                }
                            });
                    }

                    spawn_panel_button(panel, "Close");
                });
        });
}

fn spawn_card(grid: &mut ChildBuilder, card: &CardViewModel) {
    let tint = hex_color(card.tint);
    grid.spawn((
        CollectionCard { index: card.index },
        Button,
        PanelButton::Entry(card.index),
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(20.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(CARD_BG),
        BorderColor(tint),
        BorderRadius::all(Val::Px(15.0)),
    ))
    .with_children(|parent| {
        parent.spawn((
            Node {
                width: Val::Px(80.0),
                height: Val::Px(80.0),
                margin: UiRect::bottom(Val::Px(15.0)),
                border: UiRect::all(Val::Px(3.0)),
                ..default()
            },
            BackgroundColor(hex_color(card.swatch)),
            BorderColor(Color::WHITE),
            BorderRadius::MAX,
        ));
        parent.spawn((
            CollectionCardName,
            Text::new(card.name.clone()),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(PANEL_ACCENT),
        ));
        parent.spawn((
            Text::new(card.rarity.label()),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(tint),
        ));
        parent.spawn((
            Text::new(card.scientific_name.clone()),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(PANEL_MUTED),
        ));
    });
}

pub fn despawn_collection_screen(
    mut commands: Commands,
    query: Query<Entity, With<CollectionScreenRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn highlight_hovered_cards(
    mut cards: Query<(&Interaction, &mut BackgroundColor), (With<CollectionCard>, Changed<Interaction>)>,
) {
    for (interaction, mut bg) in &mut cards {
        bg.0 = match interaction {
            Interaction::Hovered | Interaction::Pressed => CARD_BG_HOVER,
            Interaction::None => CARD_BG,
        };
    }
}

pub fn scroll_collection(
    mut wheel_events: EventReader<MouseWheel>,
    mut grids: Query<&mut ScrollPosition, With<CollectionGrid>>,
) {
    let dy: f32 = wheel_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y * SCROLL_LINE_PX,
            MouseScrollUnit::Pixel => event.y,
        })
        .sum();
    if dy == 0.0 {
        return;
    }
    for mut scroll in &mut grids {
        scroll.offset_y = (scroll.offset_y - dy).max(0.0);
    }
}
