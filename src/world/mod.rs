//! Scenery: lights, ground, plants, and the fishing pool.
//!
//! Everything here is decorative except the pool hierarchy, whose root carries
//! `PoolTarget` and whose water and rim children carry `HitVolume`s.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use crate::shared::*;

// ─── Layout ─────────────────────────────────────────────────────────────────

const BACKGROUND_COLOR: u32 = 0xfff4e6;
const GROUND_RADIUS: f32 = 25.0;

pub const POOL_WATER_RADIUS: f32 = 4.0;
pub const POOL_WATER_DEPTH: f32 = 0.8;
pub const POOL_WATER_Y: f32 = -0.2;
pub const POOL_RIM_RADIUS: f32 = 4.2;
pub const POOL_RIM_TUBE: f32 = 0.3;

pub const PLANT_POSITIONS: [(f32, f32); 4] = [(-6.0, -8.0), (6.0, -10.0), (-8.0, 2.0), (8.0, 0.0)];

const STEM_HEIGHT: f32 = 1.5;
const LEAF_RADIUS: f32 = 0.3;
/// Leaves are squashed spheres; this is their widest stretch.
const LEAF_SCALE: Vec3 = Vec3::new(1.5, 0.3, 0.8);

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(hex_color(BACKGROUND_COLOR)))
            .insert_resource(AmbientLight {
                color: hex_color(0xfff0d4),
                brightness: 400.0,
            })
            .add_systems(Startup, (spawn_lights, spawn_ground, spawn_plants, spawn_pool));
    }
}

// ─── Hit volumes ────────────────────────────────────────────────────────────

pub fn water_hit_volume() -> HitVolume {
    HitVolume::Cylinder {
        radius: POOL_WATER_RADIUS,
        half_height: POOL_WATER_DEPTH / 2.0,
    }
}

/// The torus, flattened to the ring it sweeps.
pub fn rim_hit_volume() -> HitVolume {
    HitVolume::Ring {
        inner_radius: POOL_RIM_RADIUS - POOL_RIM_TUBE,
        outer_radius: POOL_RIM_RADIUS + POOL_RIM_TUBE,
        half_height: POOL_RIM_TUBE,
    }
}

// ─── Startup systems ────────────────────────────────────────────────────────

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            color: hex_color(0xffd89b),
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(15.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Fill light"),
        DirectionalLight {
            color: hex_color(0xffb87a),
            illuminance: 4_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, 15.0, -8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Circle::new(GROUND_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: hex_color(0xe8d4b8),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        HitVolume::Cylinder {
            radius: GROUND_RADIUS,
            half_height: 0.01,
        },
    ));
}

fn spawn_plants(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let stem_mesh = meshes.add(Cylinder::new(0.08, STEM_HEIGHT));
    let leaf_mesh = meshes.add(Sphere::new(LEAF_RADIUS));
    let stem_material = materials.add(StandardMaterial {
        base_color: hex_color(0x6b8e23),
        perceptual_roughness: 0.9,
        ..default()
    });
    let leaf_material = materials.add(StandardMaterial {
        base_color: hex_color(0x90ee90),
        perceptual_roughness: 0.8,
        ..default()
    });

    for (x, z) in PLANT_POSITIONS {
        commands
            .spawn((
                Name::new("Plant"),
                Transform::from_xyz(x, 0.0, z),
                Visibility::default(),
            ))
            .with_children(|plant| {
                plant.spawn((
                    Mesh3d(stem_mesh.clone()),
                    MeshMaterial3d(stem_material.clone()),
                    Transform::from_xyz(0.0, STEM_HEIGHT / 2.0, 0.0),
                    HitVolume::Cylinder {
                        radius: 0.08,
                        half_height: STEM_HEIGHT / 2.0,
                    },
                ));
                for i in 0..3 {
                    let angle = i as f32 * TAU / 3.0;
                    plant.spawn((
                        Mesh3d(leaf_mesh.clone()),
                        MeshMaterial3d(leaf_material.clone()),
                        Transform::from_xyz(
                            angle.cos() * 0.3,
                            1.3 + i as f32 * 0.2,
                            angle.sin() * 0.3,
                        )
                        .with_scale(LEAF_SCALE),
                        HitVolume::Sphere { radius: LEAF_RADIUS },
                    ));
                }
            });
    }
}

fn spawn_pool(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let water_material = materials.add(StandardMaterial {
        base_color: hex_color(0x87CEEB).with_alpha(0.85),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.05,
        metallic: 0.1,
        ..default()
    });
    let rim_material = materials.add(StandardMaterial {
        base_color: hex_color(0x8b6f47),
        perceptual_roughness: 0.8,
        ..default()
    });

    commands
        .spawn((
            Name::new("Pool"),
            PoolTarget,
            Transform::from_translation(POOL_POSITION),
            Visibility::default(),
        ))
        .with_children(|pool| {
            pool.spawn((
                Name::new("Pool water"),
                Mesh3d(meshes.add(Cylinder::new(POOL_WATER_RADIUS, POOL_WATER_DEPTH))),
                MeshMaterial3d(water_material),
                Transform::from_xyz(0.0, POOL_WATER_Y, 0.0),
                water_hit_volume(),
            ));
            pool.spawn((
                Name::new("Pool rim"),
                Mesh3d(meshes.add(Torus::new(
                    POOL_RIM_RADIUS - POOL_RIM_TUBE,
                    POOL_RIM_RADIUS + POOL_RIM_TUBE,
                ))),
                MeshMaterial3d(rim_material),
                Transform::default(),
                rim_hit_volume(),
            ));
        });
}
