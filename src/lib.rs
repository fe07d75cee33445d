//! CubeBlast: a minimal first-person "shoot the cube" arcade game.
//!
//! The game core ([`game`], [`round`], [`targets`], [`input`],
//! [`high_score`], [`presentation`]) is plain Rust driven through the
//! [`arena::Arena`] and [`presentation::UiSurface`] traits.  The remaining
//! modules host it inside a Bevy app: scene, camera, debris, widgets and the
//! per-frame systems that call into the state machine.

pub mod arena;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod high_score;
pub mod input;
pub mod particles;
pub mod player;
pub mod presentation;
pub mod round;
pub mod session;
pub mod targets;
pub mod ui;
pub mod world;
