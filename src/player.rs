//! First-person avatar: mouse look and WASD movement.
//!
//! ## Pipeline (runs in order every `Update` frame while a round is live)
//!
//! 1. [`player_intent_clear_system`]: resets [`PlayerIntent`].
//! 2. [`mouse_look_to_intent_system`]: accumulated mouse motion → look delta.
//! 3. [`keyboard_to_intent_system`]: WASD → planar movement.
//! 4. [`apply_player_intent_system`]: intent → camera yaw/pitch and position.
//!
//! Tests populate `PlayerIntent` directly and run only the apply step.

use crate::config::GameConfig;
use crate::constants::MAX_PITCH;
use crate::session::round_in_play;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

// ── Components / resources ────────────────────────────────────────────────────

/// Marker for the avatar (the arena camera while a round is running).
#[derive(Component)]
pub struct Player;

/// Accumulated view angles in radians.  Yaw 0 looks down -Z.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct FirstPersonLook {
    pub yaw: f32,
    pub pitch: f32,
}

/// Aggregated player intent for the current frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Change in (yaw, pitch), radians.
    pub look: Vec2,
    /// Planar movement: `x` strafes right, `y` walks forward.  Length ≤ 1.
    pub movement: Vec2,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>().add_systems(
            Update,
            (
                player_intent_clear_system,
                mouse_look_to_intent_system,
                keyboard_to_intent_system,
                apply_player_intent_system,
            )
                .chain()
                .run_if(round_in_play),
        );
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

pub fn player_intent_clear_system(mut intent: ResMut<PlayerIntent>) {
    *intent = PlayerIntent::default();
}

/// Mouse right turns right (negative yaw); mouse down looks down.
pub fn mouse_look_to_intent_system(
    motion: Res<AccumulatedMouseMotion>,
    config: Res<GameConfig>,
    mut intent: ResMut<PlayerIntent>,
) {
    intent.look = -motion.delta * config.look_sensitivity;
}

pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    let mut movement = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        movement.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        movement.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        movement.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        movement.x -= 1.0;
    }
    intent.movement = movement.normalize_or_zero();
}

/// Turn the view and walk on the ground plane, staying over the ground.
pub fn apply_player_intent_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    intent: Res<PlayerIntent>,
    mut q: Query<(&mut Transform, &mut FirstPersonLook), With<Player>>,
) {
    let Ok((mut transform, mut look)) = q.single_mut() else {
        return;
    };

    look.yaw += intent.look.x;
    look.pitch = (look.pitch + intent.look.y).clamp(-MAX_PITCH, MAX_PITCH);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, look.yaw, look.pitch, 0.0);

    // Movement ignores pitch so looking down does not slow walking.
    let (sin, cos) = look.yaw.sin_cos();
    let forward = Vec3::new(-sin, 0.0, -cos);
    let right = Vec3::new(cos, 0.0, -sin);
    let step = (right * intent.movement.x + forward * intent.movement.y)
        * config.move_speed
        * time.delta_secs();

    let limit = config.ground_size / 2.0;
    transform.translation.x = (transform.translation.x + step.x).clamp(-limit, limit);
    transform.translation.z = (transform.translation.z + step.z).clamp(-limit, limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    /// Minimal app with just what `apply_player_intent_system` reads.
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            500,
        )));
        app.insert_resource(GameConfig::default());
        app.add_systems(Update, apply_player_intent_system);
        app
    }

    fn spawn_test_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                FirstPersonLook::default(),
                Transform::from_xyz(0.0, 1.7, 0.0),
            ))
            .id()
    }

    fn run_with(app: &mut App, intent: PlayerIntent, frames: usize) {
        app.insert_resource(intent);
        for _ in 0..frames {
            app.update();
        }
    }

    #[test]
    fn forward_walks_toward_negative_z() {
        let mut app = build_test_app();
        let player = spawn_test_player(&mut app);
        run_with(
            &mut app,
            PlayerIntent {
                movement: Vec2::Y,
                ..Default::default()
            },
            3,
        );
        let t = app.world().get::<Transform>(player).unwrap();
        assert!(t.translation.z < 0.0, "got {:?}", t.translation);
        assert!(t.translation.x.abs() < 1e-4);
        assert_eq!(t.translation.y, 1.7, "walking never changes eye height");
    }

    #[test]
    fn pitch_is_clamped() {
        let mut app = build_test_app();
        let player = spawn_test_player(&mut app);
        run_with(
            &mut app,
            PlayerIntent {
                look: Vec2::new(0.0, 10.0),
                ..Default::default()
            },
            2,
        );
        let look = app.world().get::<FirstPersonLook>(player).unwrap();
        assert_eq!(look.pitch, MAX_PITCH);
    }

    #[test]
    fn movement_stays_over_the_ground() {
        let mut app = build_test_app();
        let player = spawn_test_player(&mut app);
        app.world_mut().resource_mut::<GameConfig>().move_speed = 1_000.0;
        run_with(
            &mut app,
            PlayerIntent {
                movement: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            4,
        );
        let limit = GameConfig::default().ground_size / 2.0;
        let t = app.world().get::<Transform>(player).unwrap();
        assert_eq!(t.translation.x, limit);
    }

    #[test]
    fn rejected_ground_size_falls_back_to_a_walkable_ground() {
        let mut app = build_test_app();
        let player = spawn_test_player(&mut app);
        // Same fallback `load_game_config` applies to a bad file.
        let config = GameConfig::from_toml_str("ground_size = -10.0").unwrap_or_default();
        app.insert_resource(config);
        run_with(
            &mut app,
            PlayerIntent {
                movement: Vec2::Y,
                ..Default::default()
            },
            3,
        );
        let t = app.world().get::<Transform>(player).unwrap();
        assert!(t.translation.z < 0.0, "got {:?}", t.translation);
    }

    #[test]
    fn nothing_moves_without_a_player() {
        let mut app = build_test_app();
        let bystander = app.world_mut().spawn(Transform::default()).id();
        run_with(
            &mut app,
            PlayerIntent {
                movement: Vec2::Y,
                look: Vec2::ONE,
            },
            3,
        );
        assert_eq!(
            *app.world().get::<Transform>(bystander).unwrap(),
            Transform::default()
        );
    }
}
