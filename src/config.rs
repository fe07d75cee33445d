//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the constants in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! round_seconds = 30.0
//! target_count = 12
//! ```

use crate::constants::*;
use crate::error::{GameError, GameResult};
use crate::game::RoundSettings;
use crate::targets::SpawnArea;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::PathBuf;

/// Location of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Round ────────────────────────────────────────────────────────────────
    pub target_count: usize,
    pub round_seconds: f32,

    // ── Arena ────────────────────────────────────────────────────────────────
    pub arena_half_extent: f32,
    pub target_height: f32,
    pub snap_to_grid: bool,
    pub ground_size: f32,

    // ── Effects ──────────────────────────────────────────────────────────────
    pub debris_count: u32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub move_speed: f32,
    pub look_sensitivity: f32,

    // ── Storage / UI ─────────────────────────────────────────────────────────
    pub high_score_path: PathBuf,
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_count: TARGET_COUNT,
            round_seconds: ROUND_SECONDS,
            arena_half_extent: ARENA_HALF_EXTENT,
            target_height: TARGET_HEIGHT,
            snap_to_grid: SNAP_TO_GRID,
            ground_size: GROUND_SIZE,
            debris_count: DEBRIS_COUNT,
            move_speed: MOVE_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            high_score_path: PathBuf::from(HIGH_SCORE_PATH),
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Decode a TOML document, filling unspecified keys from the defaults.
    ///
    /// Negative or non-finite extents and durations are rejected so the spawn
    /// bounds, round timer and ground clamp cannot be broken from the config
    /// file.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|e| GameError::Config {
            message: e.to_string(),
        })?;

        if !(config.round_seconds.is_finite() && config.round_seconds > 0.0) {
            return Err(GameError::Config {
                message: format!("round_seconds must be > 0, got {}", config.round_seconds),
            });
        }
        if !(config.arena_half_extent.is_finite() && config.arena_half_extent >= 0.0) {
            return Err(GameError::Config {
                message: format!(
                    "arena_half_extent must be >= 0, got {}",
                    config.arena_half_extent
                ),
            });
        }
        if !(config.ground_size.is_finite() && config.ground_size > 0.0) {
            return Err(GameError::Config {
                message: format!("ground_size must be > 0, got {}", config.ground_size),
            });
        }
        for (key, value) in [
            ("target_height", config.target_height),
            ("move_speed", config.move_speed),
            ("look_sensitivity", config.look_sensitivity),
            ("hud_font_size", config.hud_font_size),
        ] {
            if !value.is_finite() {
                return Err(GameError::Config {
                    message: format!("{key} must be a finite number, got {value}"),
                });
            }
        }
        Ok(config)
    }

    /// Round parameters handed to the state machine.
    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            target_count: self.target_count,
            round_seconds: self.round_seconds,
        }
    }

    /// Spawn region handed to the target pool.
    pub fn spawn_area(&self) -> SpawnArea {
        SpawnArea {
            half_extent: self.arena_half_extent,
            height: self.target_height,
            snap_to_grid: self.snap_to_grid,
        }
    }
}

/// Startup system: overwrite the [`GameConfig`] resource from `assets/game.toml`.
///
/// A missing file is not an error; a malformed one is logged and the compiled
/// defaults stay in place.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => {
                error!("{e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}
