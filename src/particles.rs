//! Debris bursts for destroyed targets.
//!
//! ## Design
//!
//! Debris cubes are lightweight ECS entities with a [`Debris`] component that
//! stores motion and fade state.  A two-system pipeline handles them:
//!
//! | System                       | Schedule | Purpose                                   |
//! |------------------------------|----------|-------------------------------------------|
//! | `attach_debris_mesh_system`  | Update   | Attach mesh + material to fresh debris    |
//! | `debris_update_system`       | Update   | Move, fade, and despawn expired debris    |
//!
//! [`spawn_debris_burst`] needs only `&mut Commands`; the mesh arrives one
//! frame later, which is imperceptible at 60 Hz.  Each cube gets its own
//! material so its alpha can fade independently.  Debris is cosmetic: nothing
//! in the game state reads it.

use crate::constants::{DEBRIS_FADE_MAX, DEBRIS_FADE_MIN, DEBRIS_SCALE, DEBRIS_TRAVEL_SECS};
use bevy::prelude::*;
use rand::Rng;

// ── Resources ────────────────────────────────────────────────────────────────

/// Shared unit-cube mesh used by all debris entities.
#[derive(Resource)]
pub struct DebrisMesh(pub Handle<Mesh>);

// ── Component ────────────────────────────────────────────────────────────────

/// Short-lived debris cube.
#[derive(Component)]
pub struct Debris {
    /// World-space velocity (units/s) while travelling.
    pub velocity: Vec3,
    /// Time alive so far (s).
    pub age: f32,
    /// Total lifetime (s); despawned when `age >= lifetime`.
    pub lifetime: f32,
    /// Colour of the destroyed target.
    pub color: Color,
    /// This cube's own material.  `None` until `attach_debris_mesh_system` runs.
    pub material: Option<Handle<StandardMaterial>>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_debris_mesh).add_systems(
            Update,
            (attach_debris_mesh_system, debris_update_system).chain(),
        );
    }
}

fn init_debris_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    commands.insert_resource(DebrisMesh(handle));
}

// ── Update systems ────────────────────────────────────────────────────────────

/// Give every newly spawned [`Debris`] its mesh and a blendable material.
pub fn attach_debris_mesh_system(
    mut commands: Commands,
    debris_mesh: Res<DebrisMesh>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(Entity, &mut Debris), Added<Debris>>,
) {
    for (entity, mut debris) in query.iter_mut() {
        let handle = materials.add(StandardMaterial {
            base_color: debris.color,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        debris.material = Some(handle.clone());
        commands
            .entity(entity)
            .insert((Mesh3d(debris_mesh.0.clone()), MeshMaterial3d(handle)));
    }
}

/// Move debris for its travel window, fade alpha quadratically over its
/// lifetime, and despawn it at the end.
pub fn debris_update_system(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(Entity, &mut Transform, &mut Debris)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut debris) in query.iter_mut() {
        let moving = (DEBRIS_TRAVEL_SECS - debris.age).clamp(0.0, dt);
        debris.age += dt;

        if debris.age >= debris.lifetime {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation += debris.velocity * moving;

        let t = debris.age / debris.lifetime;
        let alpha = (1.0 - t).powi(2);

        if let Some(ref handle) = debris.material {
            if let Some(mat) = materials.get_mut(handle) {
                mat.base_color = debris.color.with_alpha(alpha);
            }
        }
    }
}

// ── Spawn helper ──────────────────────────────────────────────────────────────

/// Burst `count` debris cubes out of a destroyed target at `pos`.
///
/// Each cube starts within ±0.5 of the centre and drifts to an end offset of
/// (±2, 1..3, ±2) over [`DEBRIS_TRAVEL_SECS`], fading out over a random
/// lifetime.
pub fn spawn_debris_burst(commands: &mut Commands, pos: Vec3, color: Color, count: u32) {
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let offset = Vec3::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        );
        let travel = Vec3::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(1.0..3.0),
            rng.gen_range(-2.0..2.0),
        );
        let lifetime = rng.gen_range(DEBRIS_FADE_MIN..DEBRIS_FADE_MAX);

        commands.spawn((
            Debris {
                velocity: travel / DEBRIS_TRAVEL_SECS,
                age: 0.0,
                lifetime,
                color,
                material: None,
            },
            Transform::from_translation(pos + offset).with_scale(Vec3::splat(DEBRIS_SCALE)),
            Visibility::default(),
        ));
    }
}
