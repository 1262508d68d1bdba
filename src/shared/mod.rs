//! Shared components, resources, events, and states for Reef Catch.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE
// ═══════════════════════════════════════════════════════════════════════

/// `Detail` and `Collection` are the two modal states: capture is released
/// and look/move input is frozen while either is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    /// Page loaded or focus lost; waiting for a click to grab the pointer.
    Uncaptured,
    /// Pointer captured, look and movement active.
    Exploring,
    /// Fish encyclopedia detail panel.
    Detail,
    /// Backpack / collection grid.
    Collection,
}

impl GameState {
    pub fn is_modal(self) -> bool {
        matches!(self, GameState::Detail | GameState::Collection)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FISH DATA
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic];

    /// Chance of this tier being drawn on a single catch.
    pub fn draw_probability(self) -> f64 {
        match self {
            Rarity::Common => 0.40,
            Rarity::Uncommon => 0.30,
            Rarity::Rare => 0.20,
            Rarity::Epic => 0.10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
        }
    }

    /// Tint used for rarity labels and card borders.
    pub fn ui_color_hex(self) -> u32 {
        match self {
            Rarity::Common => 0x999999,
            Rarity::Uncommon => 0x4CAF50,
            Rarity::Rare => 0x2196F3,
            Rarity::Epic => 0x9C27B0,
        }
    }

    pub fn ui_color(self) -> Color {
        hex_color(self.ui_color_hex())
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One encyclopedia entry. Identity is the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSpecies {
    pub name: String,
    pub scientific_name: String,
    pub family: String,
    pub habitat: String,
    pub size: String,
    /// 24-bit RGB, e.g. `0x4169E1`.
    pub color: u32,
    pub rarity: Rarity,
    pub pattern: String,
    pub diet: String,
    pub description: String,
    pub fun_fact: String,
}

impl FishSpecies {
    pub fn display_color(&self) -> Color {
        hex_color(self.color)
    }
}

/// Index into the fixed, ordered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeciesId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    MissingTier(Rarity),
    DuplicateName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "fish catalog is empty"),
            CatalogError::MissingTier(rarity) => {
                write!(f, "fish catalog has no {} species", rarity)
            }
            CatalogError::DuplicateName(name) => {
                write!(f, "fish catalog lists \"{}\" more than once", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The fish encyclopedia. Populated once by the data layer, never mutated after.
#[derive(Resource, Debug, Clone, Default)]
pub struct FishCatalog {
    pub species: Vec<FishSpecies>,
}

impl FishCatalog {
    pub fn get(&self, id: SpeciesId) -> Option<&FishSpecies> {
        self.species.get(id.0)
    }

    pub fn by_name(&self, name: &str) -> Option<SpeciesId> {
        self.species.iter().position(|s| s.name == name).map(SpeciesId)
    }

    /// Ids of every species in `rarity`, in catalog order.
    pub fn tier(&self, rarity: Rarity) -> Vec<SpeciesId> {
        self.species
            .iter()
            .enumerate()
            .filter(|(_, s)| s.rarity == rarity)
            .map(|(i, _)| SpeciesId(i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Every rarity tier must have at least one species, otherwise a draw
    /// landing on that tier has nothing to pick.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.species.is_empty() {
            return Err(CatalogError::Empty);
        }
        for rarity in Rarity::ALL {
            if !self.species.iter().any(|s| s.rarity == rarity) {
                return Err(CatalogError::MissingTier(rarity));
            }
        }
        for (i, s) in self.species.iter().enumerate() {
            if self.species[..i].iter().any(|other| other.name == s.name) {
                return Err(CatalogError::DuplicateName(s.name.clone()));
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COLLECTION
// ═══════════════════════════════════════════════════════════════════════

/// Every fish caught this session, in catch order. Duplicates are kept.
#[derive(Resource, Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<SpeciesId>,
}

impl Collection {
    pub fn add(&mut self, species: SpeciesId) {
        self.entries.push(species);
    }

    pub fn all(&self) -> &[SpeciesId] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SpeciesId> {
        self.entries.get(index).copied()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

/// Marks the first-person camera entity.
#[derive(Component, Debug, Default)]
pub struct Player;

/// Camera orientation in radians. Yaw is unbounded; pitch stays within ±π/2.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

/// Currently held movement keys. Any combination may be active at once.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }
}

/// Whether the pointer is captured. Mouse motion is ignored unless engaged.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerCapture {
    pub engaged: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD
// ═══════════════════════════════════════════════════════════════════════

/// World position of the pool's root entity.
pub const POOL_POSITION: Vec3 = Vec3::new(0.0, 0.0, -5.0);

/// Tags the pool's root entity. Any descendant surface counts as the pool.
#[derive(Component, Debug, Default)]
pub struct PoolTarget;

/// Ray-testable volume, expressed in the entity's local frame. Centred on the
/// entity's global translation and scaled by its global scale; rotation is
/// ignored, so boxes stay world-axis aligned and cylinders stay upright.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum HitVolume {
    Box { half_extents: Vec3 },
    Sphere { radius: f32 },
    /// Solid upright cylinder.
    Cylinder { radius: f32, half_height: f32 },
    /// Upright cylinder with a hole through the middle. Rays passing down the
    /// hole miss.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        half_height: f32,
    },
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent by the raycaster when a click lands on the pool.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishCaughtEvent {
    pub species: SpeciesId,
}

/// What the player asked the panels to do.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    Close,
    ToggleCollection,
    /// Open the detail panel for the n-th collection entry.
    SelectEntry(usize),
}

/// Which species the detail panel shows, and when it may appear.
#[derive(Resource, Debug, Clone)]
pub struct DetailView {
    pub species: SpeciesId,
    pub reveal: Timer,
}

impl DetailView {
    pub fn immediate(species: SpeciesId) -> Self {
        Self::delayed(species, 0.0)
    }

    pub fn delayed(species: SpeciesId, secs: f32) -> Self {
        Self {
            species,
            reveal: Timer::from_seconds(secs.max(0.0), TimerMode::Once),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.finished() || self.reveal.duration().is_zero()
    }
}

/// Pointer capture was taken away (focus loss, Escape).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureLostEvent;

// ═══════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════

pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

/// `#rrggbb`, lower-case, zero padded.
pub fn hex_string(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xff_ffff)
}
