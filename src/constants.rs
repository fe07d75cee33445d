//! Centralised gameplay constants.
//!
//! Every value here is the compiled default for the matching field of
//! [`crate::config::GameConfig`].  Override them at runtime in
//! `assets/game.toml` rather than editing this file.

// ── Round ─────────────────────────────────────────────────────────────────────

/// Number of live targets kept in the arena for the whole round.
///
/// A destroyed target is replaced immediately, so the population never drops.
pub const TARGET_COUNT: usize = 20;

/// Length of one round in seconds.
pub const ROUND_SECONDS: f32 = 60.0;

/// Points awarded for each destroyed target.
pub const POINTS_PER_HIT: u32 = 1;

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Half-width of the square spawn region: targets land in `[-B, B] x [-B, B]`.
pub const ARENA_HALF_EXTENT: f32 = 8.0;

/// Height of a target's centre; a unit cube at 0.5 rests on the ground.
pub const TARGET_HEIGHT: f32 = 0.5;

/// Snap spawn coordinates to whole units.
pub const SNAP_TO_GRID: bool = true;

/// Edge length of the square ground plane.
pub const GROUND_SIZE: f32 = 50.0;

// ── Destroy effect ────────────────────────────────────────────────────────────

/// Debris cubes emitted per destroyed target.
pub const DEBRIS_COUNT: u32 = 10;

/// Edge length of one debris cube.
pub const DEBRIS_SCALE: f32 = 0.2;

/// Seconds a debris cube takes to reach its end offset.
pub const DEBRIS_TRAVEL_SECS: f32 = 0.5;

/// Fade duration range (s) for debris.
pub const DEBRIS_FADE_MIN: f32 = 0.5;
pub const DEBRIS_FADE_MAX: f32 = 0.9;

// ── Player ────────────────────────────────────────────────────────────────────

/// Walking speed on the ground plane (units/s).
pub const MOVE_SPEED: f32 = 5.0;

/// Radians of yaw/pitch per pixel of mouse motion.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Camera height above the ground while playing.
pub const EYE_HEIGHT: f32 = 1.7;

/// Where the avatar starts each round (ground plane coordinates).
pub const PLAYER_START_Z: f32 = 12.0;

/// Pitch clamp, just short of straight up/down.
pub const MAX_PITCH: f32 = 89.0_f32 * std::f32::consts::PI / 180.0;

// ── Storage ───────────────────────────────────────────────────────────────────

/// File holding the ASCII decimal high score.
pub const HIGH_SCORE_PATH: &str = "highscore.txt";

// ── UI ────────────────────────────────────────────────────────────────────────

/// Font size of the in-round HUD labels.
pub const HUD_FONT_SIZE: f32 = 28.0;
