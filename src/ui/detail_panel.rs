use bevy::prelude::*;
use crate::shared::*;
use super::{spawn_panel_button, PANEL_ACCENT, PANEL_BG, PANEL_MUTED, PANEL_TEXT};

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct DetailPanelRoot;

#[derive(Component)]
pub struct DetailTitle;

// ═══════════════════════════════════════════════════════════════════════
// VIEW MODEL
// ═══════════════════════════════════════════════════════════════════════

/// Everything the encyclopedia page shows for one species.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub title: String,
    pub scientific_name: String,
    pub swatch: u32,
    pub rarity: Rarity,
    /// Labelled facts in display order. The "Rarity" row is tinted.
    pub facts: Vec<(&'static str, String)>,
    pub description: String,
    pub fun_fact: String,
    pub button_label: &'static str,
}

impl DetailViewModel {
    pub fn new(species: &FishSpecies) -> Self {
        Self {
            title: species.name.clone(),
            scientific_name: species.scientific_name.clone(),
            swatch: species.color,
            rarity: species.rarity,
            facts: vec![
                ("Family", species.family.clone()),
                ("Size", species.size.clone()),
                ("Rarity", species.rarity.label().to_string()),
                ("Habitat", species.habitat.clone()),
                ("Diet", species.diet.clone()),
                ("Pattern", species.pattern.clone()),
            ],
            description: species.description.clone(),
            fun_fact: species.fun_fact.clone(),
            button_label: "Continue Exploring",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

/// Spawned hidden when the reveal timer is still running (fresh catch).
pub fn spawn_detail_panel(
    mut commands: Commands,
    detail: Option<Res<DetailView>>,
    catalog: Res<FishCatalog>,
) {
    let Some(detail) = detail else {
        warn!("[UI] Detail panel opened without a species");
        return;
    };
    let Some(species) = catalog.get(detail.species) else {
        warn!("[UI] Detail panel for unknown species {:?}", detail.species);
        return;
    };
    let view = DetailViewModel::new(species);
    let visibility = if detail.is_revealed() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((
            DetailPanelRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            visibility,
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(500.0),
                        max_height: Val::Vh(80.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(40.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                    BackgroundColor(PANEL_BG),
                    BorderColor(PANEL_ACCENT),
                    BorderRadius::all(Val::Px(20.0)),
                ))
                .with_children(|panel| spawn_detail_contents(panel, &view));
        });
}

fn spawn_detail_contents(panel: &mut ChildBuilder, view: &DetailViewModel) {
    panel.spawn((
        DetailTitle,
        Text::new(view.title.clone()),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(PANEL_ACCENT),
    ));
    panel.spawn((
        Text::new(view.scientific_name.clone()),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(PANEL_MUTED),
        Node {
            margin: UiRect::vertical(Val::Px(5.0)),
            ..default()
        },
    ));

    // Colour swatch
    panel.spawn((
        Node {
            width: Val::Px(120.0),
            height: Val::Px(120.0),
            align_self: AlignSelf::Center,
            margin: UiRect::vertical(Val::Px(20.0)),
            border: UiRect::all(Val::Px(4.0)),
            ..default()
        },
        BackgroundColor(hex_color(view.swatch)),
        BorderColor(Color::WHITE),
        BorderRadius::MAX,
    ));

    // Fact sheet
    panel
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(20.0)),
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(PANEL_ACCENT.with_alpha(0.1)),
            BorderRadius::all(Val::Px(10.0)),
        ))
        .with_children(|sheet| {
            for (label, value) in &view.facts {
                let value_color = if *label == "Rarity" {
                    view.rarity.ui_color()
                } else {
                    PANEL_TEXT
                };
                sheet
                    .spawn((
                        Text::new(format!("{}: ", label)),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(PANEL_TEXT),
                    ))
                    .with_children(|row| {
                        row.spawn((
                            TextSpan::new(value.clone()),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            TextColor(value_color),
                        ));
                    });
            }
        });

    panel.spawn((
        Text::new(view.description.clone()),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(PANEL_TEXT),
        Node {
            margin: UiRect::vertical(Val::Px(20.0)),
            ..default()
        },
    ));

    // Fun fact callout
    panel
        .spawn((
            Node {
                padding: UiRect::all(Val::Px(15.0)),
                border: UiRect::left(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 0.757, 0.027, 0.15)),
            BorderColor(Color::srgb(1.0, 0.757, 0.027)),
        ))
        .with_children(|callout| {
            callout.spawn((
                Text::new(format!("Fun Fact: {}", view.fun_fact)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(PANEL_TEXT),
            ));
        });

    spawn_panel_button(panel, view.button_label);
}

pub fn despawn_detail_panel(
    mut commands: Commands,
    query: Query<Entity, With<DetailPanelRoot>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<DetailView>();
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Counts down the post-catch delay, then shows the panel.
pub fn reveal_detail_panel(
    time: Res<Time>,
    detail: Option<ResMut<DetailView>>,
    mut query: Query<&mut Visibility, With<DetailPanelRoot>>,
) {
    let Some(mut detail) = detail else {
        return;
    };
    if detail.is_revealed() {
        return;
    }
    detail.reveal.tick(time.delta());
    if !detail.is_revealed() {
        return;
    }
    for mut visibility in &mut query {
        *visibility = Visibility::Inherited;
    }
}
