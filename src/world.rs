//! The 3D arena: ground, light, camera, and the Bevy side of [`Arena`].
//!
//! [`ArenaParams`] is a system parameter that bundles everything the core
//! needs to touch the world.  Systems take it by value and pass `&mut` to the
//! state machine, which sees only the [`Arena`] trait.

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::constants::{EYE_HEIGHT, PLAYER_START_Z};
use crate::particles::{spawn_debris_burst, Debris};
use crate::player::{FirstPersonLook, Player};
use bevy::ecs::system::SystemParam;
use bevy::math::Ray3d;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

/// Sky colour shown behind the arena.
pub const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);

fn ground_color() -> Color {
    Color::srgb(0.20, 0.55, 0.22)
}

// ── Components / resources ────────────────────────────────────────────────────

/// Marker for target cube entities.
#[derive(Component)]
pub struct TargetCube;

/// Marker for the ground plane.
#[derive(Component)]
pub struct Ground;

/// The single 3D camera.  Carries [`Player`] while a round is live.
#[derive(Component)]
pub struct ArenaCamera;

/// Shared unit-cube mesh for targets (created once at startup).
#[derive(Resource)]
pub struct ArenaAssets {
    pub cube: Handle<Mesh>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR)).add_systems(
            Startup,
            setup_arena.after(crate::config::load_game_config),
        );
    }
}

/// Camera pose used while no round is running.
pub fn menu_vantage() -> Transform {
    Transform::from_xyz(0.0, 6.0, 18.0).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y)
}

/// Camera pose at the start of a round: eye height, facing the arena (-Z).
pub fn player_start() -> Transform {
    Transform::from_xyz(0.0, EYE_HEIGHT, PLAYER_START_Z)
}

/// Spawn ground, light and camera; register the shared target mesh.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    commands.insert_resource(ArenaAssets {
        cube: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
    });

    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(config.ground_size, config.ground_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ground_color(),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((Camera3d::default(), ArenaCamera, menu_vantage()));

    info!("Arena ready ({}x{} ground)", config.ground_size, config.ground_size);
}

// ── Arena implementation ──────────────────────────────────────────────────────

#[derive(SystemParam)]
pub struct ArenaParams<'w, 's> {
    commands: Commands<'w, 's>,
    assets: Res<'w, ArenaAssets>,
    config: Res<'w, GameConfig>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    ray_cast: MeshRayCast<'w, 's>,
    camera: Query<'w, 's, (Entity, &'static GlobalTransform), With<ArenaCamera>>,
    cursor: Query<'w, 's, &'static mut CursorOptions, With<PrimaryWindow>>,
    debris: Query<'w, 's, (), With<Debris>>,
}

impl Arena for ArenaParams<'_, '_> {
    type Handle = Entity;

    fn spawn_box(&mut self, position: Vec3, color: Color) -> Entity {
        let material = self.materials.add(StandardMaterial {
            base_color: color,
            ..default()
        });
        self.commands
            .spawn((
                TargetCube,
                Mesh3d(self.assets.cube.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(position),
            ))
            .id()
    }

    fn destroy(&mut self, handle: Entity) {
        if let Ok(mut entity) = self.commands.get_entity(handle) {
            entity.despawn();
        }
    }

    /// Nearest mesh hit by a ray from the eye through the screen centre.
    ///
    /// Debris is skipped so a fresh burst never swallows the next click.
    fn hovered(&mut self) -> Option<Entity> {
        let (_, eye) = self.camera.single().ok()?;
        let ray = Ray3d::new(eye.translation(), eye.forward());
        let debris = &self.debris;
        let not_debris = |entity: Entity| !debris.contains(entity);
        let settings = MeshRayCastSettings::default().with_filter(&not_debris);
        self.ray_cast
            .cast_ray(ray, &settings)
            .first()
            .map(|(entity, _)| *entity)
    }

    fn set_pointer_locked(&mut self, locked: bool) {
        for mut cursor in self.cursor.iter_mut() {
            cursor.grab_mode = if locked {
                CursorGrabMode::Locked
            } else {
                CursorGrabMode::None
            };
            cursor.visible = !locked;
        }
    }

    fn burst(&mut self, position: Vec3, color: Color) {
        spawn_debris_burst(&mut self.commands, position, color, self.config.debris_count);
    }

    fn spawn_player(&mut self) {
        let Ok((camera, _)) = self.camera.single() else {
            warn!("No arena camera; cannot place player");
            return;
        };
        self.commands
            .entity(camera)
            .insert((Player, FirstPersonLook::default(), player_start()));
    }

    fn despawn_player(&mut self) {
        let Ok((camera, _)) = self.camera.single() else {
            return;
        };
        self.commands
            .entity(camera)
            .remove::<(Player, FirstPersonLook)>()
            .insert(menu_vantage());
    }
}
