//! Centre-of-view hit testing against `HitVolume`s.
//!
//! A click fires one ray from the camera through the middle of the viewport.
//! Only the nearest hit matters: if that surface, or any of its ancestors,
//! is tagged `PoolTarget`, the click is a catch.

use bevy::math::bounding::{Aabb3d, BoundingSphere, RayCast3d};
use bevy::prelude::*;
use rand::thread_rng;

use crate::shared::*;
use super::loot::pick_species;

/// Matches the camera's far plane.
pub const MAX_RAY_DISTANCE: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
}

/// For a perspective camera the ray through the viewport centre is the
/// camera's own forward axis.
pub fn center_ray(camera: &GlobalTransform) -> Ray3d {
    Ray3d {
        origin: camera.translation(),
        direction: camera.forward(),
    }
}

/// Distance along `ray` to `volume` placed by `transform`, if it is hit.
pub fn volume_hit_distance(
    ray: &RayCast3d,
    volume: &HitVolume,
    transform: &GlobalTransform,
) -> Option<f32> {
    let (scale, _, translation) = transform.to_scale_rotation_translation();
    let scale = scale.abs();
    match *volume {
        HitVolume::Box { half_extents } => {
            ray.aabb_intersection_at(&Aabb3d::new(translation, half_extents * scale))
        }
        HitVolume::Sphere { radius } => ray.sphere_intersection_at(&BoundingSphere::new(
            translation,
            radius * scale.max_element(),
        )),
        HitVolume::Cylinder { radius, half_height } => upright_hit_distance(
            ray,
            translation,
            0.0,
            radius * scale.x.max(scale.z),
            half_height * scale.y,
        ),
        HitVolume::Ring {
            inner_radius,
            outer_radius,
            half_height,
        } => {
            let radial = scale.x.max(scale.z);
            upright_hit_distance(
                ray,
                translation,
                inner_radius * radial,
                outer_radius * radial,
                half_height * scale.y,
            )
        }
    }
}

/// First distance at which the ray is inside an upright solid bounded by the
/// slab `|y| <= half_height` and the radii `inner <= r <= outer` around
/// `center`. An `inner` of zero makes it a plain cylinder.
fn upright_hit_distance(
    ray: &RayCast3d,
    center: Vec3,
    inner: f32,
    outer: f32,
    half_height: f32,
) -> Option<f32> {
    let origin = Vec3::from(ray.origin) - center;
    let direction = Vec3::from(*ray.direction);

    let (slab_in, slab_out) = slab_span(origin.y, direction.y, half_height)?;
    let (disc_in, disc_out) = radial_span(origin, direction, outer)?;
    let enter = slab_in.max(disc_in).max(0.0);
    let exit = slab_out.min(disc_out).min(ray.max);
    if enter > exit {
        return None;
    }
    if inner <= 0.0 {
        return Some(enter);
    }

    // Step past the hole if the ray is in it at the entry point.
    match radial_span(origin, direction, inner) {
        Some((hole_in, hole_out)) if hole_in <= enter && enter < hole_out => {
            (hole_out <= exit).then_some(hole_out)
        }
        _ => Some(enter),
    }
}

/// Ray parameters for which `|origin + t * direction| <= half` on one axis.
fn slab_span(origin: f32, direction: f32, half: f32) -> Option<(f32, f32)> {
    if direction.abs() < f32::EPSILON {
        return (origin.abs() <= half).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let a = (-half - origin) / direction;
    let b = (half - origin) / direction;
    Some((a.min(b), a.max(b)))
}

/// Ray parameters for which the ray is within `radius` of the Y axis.
fn radial_span(origin: Vec3, direction: Vec3, radius: f32) -> Option<(f32, f32)> {
    let o = Vec2::new(origin.x, origin.z);
    let d = Vec2::new(direction.x, direction.z);
    let a = d.length_squared();
    let c = o.length_squared() - radius * radius;
    if a < f32::EPSILON {
        return (c <= 0.0).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }
    let b = 2.0 * o.dot(d);
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    Some(((-b - root) / (2.0 * a), (-b + root) / (2.0 * a)))
}

/// Every volume the ray passes through, nearest first.
pub fn cast_ray<'a>(
    ray: Ray3d,
    max_distance: f32,
    volumes: impl IntoIterator<Item = (Entity, &'a HitVolume, &'a GlobalTransform)>,
) -> Vec<RayHit> {
    let cast = RayCast3d::from_ray(ray, max_distance);
    let mut hits: Vec<RayHit> = volumes
        .into_iter()
        .filter_map(|(entity, volume, transform)| {
            volume_hit_distance(&cast, volume, transform).map(|distance| RayHit { entity, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Walk from `entity` up through its ancestors, stopping at the first one
/// `is_target` accepts.
pub fn is_owned_by(
    entity: Entity,
    parent_of: impl Fn(Entity) -> Option<Entity>,
    is_target: impl Fn(Entity) -> bool,
) -> bool {
    let mut current = Some(entity);
    while let Some(e) = current {
        if is_target(e) {
            return true;
        }
        current = parent_of(e);
    }
    false
}

/// One evaluation per primary click. Requires an engaged capture; a click
/// without capture never reaches the ray test.
pub fn try_catch_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    capture: Res<PointerCapture>,
    catalog: Res<FishCatalog>,
    camera_query: Query<&GlobalTransform, With<Player>>,
    volumes: Query<(Entity, &HitVolume, &GlobalTransform)>,
    parents: Query<&Parent>,
    pools: Query<(), With<PoolTarget>>,
    mut caught_events: EventWriter<FishCaughtEvent>,
) {
    if !capture.engaged || !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(camera) = camera_query.get_single() else {
        return;
    };

    let hits = cast_ray(center_ray(camera), MAX_RAY_DISTANCE, volumes.iter());
    let Some(nearest) = hits.first() else {
        return;
    };

    let on_pool = is_owned_by(
        nearest.entity,
        |e| parents.get(e).ok().map(|p| p.get()),
        |e| pools.contains(e),
    );
    if !on_pool {
        return;
    }

    match pick_species(&catalog, &mut thread_rng()) {
        Some(species) => {
            caught_events.send(FishCaughtEvent { species });
        }
        None => warn!("[Fishing] Drew an empty rarity tier; catalog was not validated"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{rim_hit_volume, water_hit_volume};

    fn looking_from(origin: Vec3, target: Vec3) -> GlobalTransform {
        GlobalTransform::from(Transform::from_translation(origin).looking_at(target, Vec3::Y))
    }

    #[test]
    fn test_center_ray_follows_camera_forward() {
        let camera = looking_from(Vec3::new(0.0, 1.6, 8.0), Vec3::new(0.0, 1.6, 0.0));
        let ray = center_ray(&camera);
        assert!(ray.origin.abs_diff_eq(Vec3::new(0.0, 1.6, 8.0), 1e-6));
        assert!(ray.direction.as_vec3().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn test_cast_ray_sorts_nearest_first() {
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let volume = HitVolume::Sphere { radius: 0.5 };
        let near_tf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let far_tf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -10.0));
        let ray = Ray3d {
            origin: Vec3::ZERO,
            direction: Dir3::NEG_Z,
        };

        let hits = cast_ray(ray, 100.0, [(far, &volume, &far_tf), (near, &volume, &near_tf)]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].entity, near);
        assert!((hits[0].distance - 2.5).abs() < 1e-4);
        assert_eq!(hits[1].entity, far);
    }

    #[test]
    fn test_cast_ray_misses_volumes_behind_and_beside() {
        let volume = HitVolume::Box { half_extents: Vec3::splat(1.0) };
        let behind = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, 5.0));
        let beside = GlobalTransform::from_translation(Vec3::new(5.0, 0.0, -5.0));
        let ray = Ray3d {
            origin: Vec3::ZERO,
            direction: Dir3::NEG_Z,
        };
        let hits = cast_ray(
            ray,
            100.0,
            [
                (Entity::from_raw(1), &volume, &behind),
                (Entity::from_raw(2), &volume, &beside),
            ],
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_box_volume_scales_with_transform() {
        let volume = HitVolume::Box { half_extents: Vec3::splat(0.5) };
        let scaled = GlobalTransform::from(
            Transform::from_xyz(1.5, 0.0, -5.0).with_scale(Vec3::splat(4.0)),
        );
        let cast = RayCast3d::from_ray(
            Ray3d {
                origin: Vec3::ZERO,
                direction: Dir3::NEG_Z,
            },
            100.0,
        );
        assert!(volume_hit_distance(&cast, &volume, &scaled).is_some());
        let unscaled = GlobalTransform::from_translation(Vec3::new(1.5, 0.0, -5.0));
        assert!(volume_hit_distance(&cast, &volume, &unscaled).is_none());
    }

    /// Water and rim at the pool's usual spot, plus the ground disc.
    fn pool_scene() -> [(Entity, HitVolume, GlobalTransform); 3] {
        [
            (
                Entity::from_raw(1),
                water_hit_volume(),
                GlobalTransform::from_translation(POOL_POSITION + Vec3::new(0.0, -0.2, 0.0)),
            ),
            (
                Entity::from_raw(2),
                rim_hit_volume(),
                GlobalTransform::from_translation(POOL_POSITION),
            ),
            (
                Entity::from_raw(3),
                HitVolume::Cylinder {
                    radius: 25.0,
                    half_height: 0.01,
                },
                GlobalTransform::IDENTITY,
            ),
        ]
    }

    fn look_down_at(x: f32, z: f32) -> Vec<RayHit> {
        let scene = pool_scene();
        let ray = Ray3d {
            origin: Vec3::new(x, 1.6, z),
            direction: Dir3::NEG_Y,
        };
        cast_ray(ray, 100.0, scene.iter().map(|(e, v, t)| (*e, v, t)))
    }

    #[test]
    fn test_ground_outside_round_rim_is_not_pool() {
        // 6.2 units from the pool centre, where a square rim would still reach.
        let hits = look_down_at(4.4, -0.6);
        assert_eq!(hits[0].entity, Entity::from_raw(3));
        assert!((hits[0].distance - 1.59).abs() < 1e-4);
        assert!(hits.iter().all(|hit| hit.entity == Entity::from_raw(3)));
    }

    #[test]
    fn test_rim_top_is_nearest_on_rim() {
        let hits = look_down_at(0.0, -0.8);
        assert_eq!(hits[0].entity, Entity::from_raw(2));
        assert!((hits[0].distance - 1.3).abs() < 1e-4);
    }

    #[test]
    fn test_ray_down_rim_hole_lands_on_water() {
        let hits = look_down_at(0.0, -5.0);
        assert_eq!(hits[0].entity, Entity::from_raw(1));
        assert!((hits[0].distance - 1.4).abs() < 1e-4);
        assert!(hits.iter().all(|hit| hit.entity != Entity::from_raw(2)));
    }

    #[test]
    fn test_ring_hit_from_inside_hole_strikes_inner_wall() {
        let ring = rim_hit_volume();
        let transform = GlobalTransform::IDENTITY;
        let direction = Dir3::new(Vec3::new(1.0, -0.2, 0.0)).unwrap();
        let cast = RayCast3d::from_ray(
            Ray3d {
                origin: Vec3::new(0.0, 1.0, 0.0),
                direction,
            },
            100.0,
        );
        let distance = volume_hit_distance(&cast, &ring, &transform).unwrap();
        // Inner wall at x = 3.9
        assert!((distance - 3.9 / direction.x).abs() < 1e-4);
    }

    #[test]
    fn test_ownership_walks_to_ancestor() {
        let mut world = World::new();
        let pool = world.spawn(PoolTarget).id();
        let rim = world.spawn_empty().set_parent(pool).id();
        let rim_detail = world.spawn_empty().set_parent(rim).id();
        let plant = world.spawn_empty().id();

        let parent_of = |e: Entity| world.get::<Parent>(e).map(|p| p.get());
        let is_pool = |e: Entity| world.get::<PoolTarget>(e).is_some();

        assert!(is_owned_by(pool, parent_of, is_pool));
        assert!(is_owned_by(rim, parent_of, is_pool));
        assert!(is_owned_by(rim_detail, parent_of, is_pool));
        assert!(!is_owned_by(plant, parent_of, is_pool));
    }
}
