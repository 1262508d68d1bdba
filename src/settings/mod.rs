//! Tunable game settings, optionally read from `reefcatch.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

pub const SETTINGS_FILE: &str = "reefcatch.ron";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radians of rotation per pixel of mouse motion.
    pub look_sensitivity: f32,
    /// World units per second per held direction key.
    pub move_speed: f32,
    pub field_of_view_degrees: f32,
    pub spawn_position: [f32; 3],
    /// Delay between the catch splash and the detail panel appearing.
    pub reveal_delay_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.002,
            // 0.1 units per frame at a 60 Hz reference
            move_speed: 6.0,
            field_of_view_degrees: 75.0,
            spawn_position: [0.0, 1.6, 8.0],
            reveal_delay_secs: 0.5,
        }
    }
}

impl Settings {
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        let settings: Settings =
            ron::from_str(text).map_err(|e| format!("Parse failed: {}", e))?;
        if !(settings.move_speed.is_finite() && settings.move_speed >= 0.0) {
            return Err(format!("move_speed must be non-negative, got {}", settings.move_speed));
        }
        if !(settings.reveal_delay_secs.is_finite() && settings.reveal_delay_secs >= 0.0) {
            return Err(format!(
                "reveal_delay_secs must be non-negative, got {}",
                settings.reveal_delay_secs
            ));
        }
        Ok(settings)
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_settings());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_settings(path: &Path) -> Result<Option<Settings>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    Settings::from_ron_str(&text).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Settings {
    match read_settings(Path::new(SETTINGS_FILE)) {
        Ok(Some(settings)) => {
            info!("[Settings] Loaded {}", SETTINGS_FILE);
            settings
        }
        Ok(None) => Settings::default(),
        Err(e) => {
            warn!("[Settings] {}; using defaults.", e);
            Settings::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> Settings {
    Settings::default()
}
