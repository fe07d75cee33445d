//! The world-side collaborator the game core drives.
//!
//! The core never touches Bevy entities, meshes or windows directly.  It asks
//! an [`Arena`] to create and destroy boxes, to report what the crosshair is
//! over, and to grab or release the pointer.  [`crate::world::ArenaParams`]
//! is the Bevy implementation; tests use small in-memory fakes.

use bevy::prelude::{Color, Vec3};
use std::fmt::Debug;
use std::hash::Hash;

/// Colour of a freshly spawned target.
pub const TARGET_COLOR: Color = Color::srgb(0.0, 0.5, 1.0);

pub trait Arena {
    /// Identity of a world object.  Must be stable for the object's lifetime.
    type Handle: Copy + Eq + Hash + Debug;

    /// Create a box-shaped, clickable object centred on `position`.
    fn spawn_box(&mut self, position: Vec3, color: Color) -> Self::Handle;

    /// Remove an object from the world.
    fn destroy(&mut self, handle: Self::Handle);

    /// The nearest object under the crosshair, if any.
    fn hovered(&mut self) -> Option<Self::Handle>;

    /// Capture (or release) the pointer for first-person look.
    fn set_pointer_locked(&mut self, locked: bool);

    /// Short-lived, purely cosmetic debris burst.
    fn burst(&mut self, position: Vec3, color: Color);

    /// Place the first-person avatar at its start position, creating it if needed.
    fn spawn_player(&mut self);

    /// Remove the first-person avatar if present.
    fn despawn_player(&mut self);
}
