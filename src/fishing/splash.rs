//! Catch splash: a translucent sphere that grows and fades, advanced once
//! per frame until fully transparent.

use bevy::prelude::*;

pub const SPLASH_RADIUS: f32 = 0.5;
pub const SPLASH_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const SPLASH_START_OPACITY: f32 = 0.7;
/// +0.15 scale every 30 ms.
pub const SPLASH_GROWTH_PER_SEC: f32 = 5.0;
/// -0.07 opacity every 30 ms.
pub const SPLASH_FADE_PER_SEC: f32 = 0.07 / 0.03;
/// Opacity at or below this counts as fully faded.
const FADE_EPSILON: f32 = 1e-4;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Splash {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Splash {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: SPLASH_START_OPACITY,
        }
    }
}

impl Splash {
    /// Advance by `dt` seconds. Returns false once the splash has faded out.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.scale += SPLASH_GROWTH_PER_SEC * dt;
        self.opacity -= SPLASH_FADE_PER_SEC * dt;
        if self.opacity <= FADE_EPSILON {
            self.opacity = 0.0;
            return false;
        }
        true
    }
}

pub fn animate_splashes(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(
        Entity,
        &mut Splash,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let dt = time.delta_secs();
    for (entity, mut splash, mut transform, material) in &mut query {
        if !splash.advance(dt) {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        transform.scale = Vec3::splat(splash.scale);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(splash.opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_grows_and_fades() {
        let mut splash = Splash::default();
        assert!(splash.advance(0.03));
        assert!((splash.scale - 1.15).abs() < 1e-5);
        assert!((splash.opacity - 0.63).abs() < 1e-5);
    }

    #[test]
    fn test_splash_ends_after_ten_steps() {
        let mut splash = Splash::default();
        let mut steps = 0;
        while splash.advance(0.03) {
            steps += 1;
            assert!(steps < 100, "splash never finished");
        }
        // 0.7 / 0.07 = 10 steps; the tenth reaches zero.
        assert_eq!(steps, 9);
        assert_eq!(splash.opacity, 0.0);
    }

    #[test]
    fn test_zero_dt_keeps_splash_alive() {
        let mut splash = Splash::default();
        assert!(splash.advance(0.0));
        assert_eq!(splash, Splash::default());
    }
}
