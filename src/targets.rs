//! The live set of destructible targets.
//!
//! [`TargetPool`] is keyed by the arena handle of each target, so the
//! "is the hovered object a target?" question during hit resolution is a
//! single hash lookup rather than a scan.

use crate::arena::{Arena, TARGET_COLOR};
use bevy::log::debug;
use bevy::prelude::{Color, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::hash::Hash;

/// Monotonic per-pool identity, independent of the arena handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target<H> {
    pub id: TargetId,
    pub handle: H,
    pub position: Vec3,
    pub color: Color,
    /// `true` while tracked by the pool; removal hands back a copy with `false`.
    pub alive: bool,
}

/// Horizontal square `[-half_extent, half_extent]²` at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    pub half_extent: f32,
    pub height: f32,
    /// Draw whole-unit coordinates instead of continuous ones.
    pub snap_to_grid: bool,
}

impl SpawnArea {
    /// Uniformly random spawn point inside the area.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        let b = self.half_extent;
        let (x, z) = if self.snap_to_grid {
            let lo = (-b).ceil() as i32;
            let hi = b.floor() as i32;
            (rng.gen_range(lo..=hi) as f32, rng.gen_range(lo..=hi) as f32)
        } else {
            (rng.gen_range(-b..=b), rng.gen_range(-b..=b))
        };
        Vec3::new(x, self.height, z)
    }

    pub fn contains(&self, position: Vec3) -> bool {
        let b = self.half_extent;
        (-b..=b).contains(&position.x) && (-b..=b).contains(&position.z)
    }
}

pub struct TargetPool<H> {
    area: SpawnArea,
    live: HashMap<H, Target<H>>,
    next_id: u64,
    rng: StdRng,
}

impl<H: Copy + Eq + Hash> TargetPool<H> {
    pub fn new(area: SpawnArea, rng: StdRng) -> Self {
        Self {
            area,
            live: HashMap::new(),
            next_id: 0,
            rng,
        }
    }

    /// Pool seeded from OS entropy; what the game uses outside of tests.
    pub fn from_entropy(area: SpawnArea) -> Self {
        Self::new(area, StdRng::from_entropy())
    }

    pub fn area(&self) -> SpawnArea {
        self.area
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, handle: H) -> bool {
        self.live.contains_key(&handle)
    }

    pub fn get(&self, handle: H) -> Option<&Target<H>> {
        self.live.get(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target<H>> {
        self.live.values()
    }

    /// Create one target at a random point of the spawn area.
    pub fn spawn<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> Target<H> {
        let position = self.area.sample(&mut self.rng);
        let handle = arena.spawn_box(position, TARGET_COLOR);
        let target = Target {
            id: TargetId(self.next_id),
            handle,
            position,
            color: TARGET_COLOR,
            alive: true,
        };
        self.next_id += 1;
        self.live.insert(handle, target);
        target
    }

    /// Destroy a tracked target with its debris burst.
    ///
    /// Untracked handles (already removed, or never a target) are ignored and
    /// yield `None`; the arena is not touched in that case.
    pub fn remove<A: Arena<Handle = H>>(&mut self, handle: H, arena: &mut A) -> Option<Target<H>> {
        let Some(mut target) = self.live.remove(&handle) else {
            debug!("Ignoring removal of untracked target");
            return None;
        };
        arena.burst(target.position, target.color);
        arena.destroy(handle);
        target.alive = false;
        Some(target)
    }

    /// Destroy every live target without effects.
    pub fn clear<A: Arena<Handle = H>>(&mut self, arena: &mut A) {
        for (handle, _) in self.live.drain() {
            arena.destroy(handle);
        }
    }

    /// `clear` followed by `n` spawns.
    pub fn populate<A: Arena<Handle = H>>(&mut self, n: usize, arena: &mut A) {
        self.clear(arena);
        for _ in 0..n {
            self.spawn(arena);
        }
    }
}
