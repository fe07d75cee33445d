//! The game state machine.
//!
//! ## Modes
//!
//! | Mode       | Entered from                   | Live input                         |
//! |------------|--------------------------------|------------------------------------|
//! | `Menu`     | startup, `GameOver`            | Start / Quit buttons, quit key     |
//! | `Playing`  | `Menu`, `GameOver`, `Paused`   | click, pause key, reset key, quit  |
//! | `Paused`   | `Playing`                      | pause key, quit key                |
//! | `GameOver` | `Playing` (clock hit zero)     | Play Again / Menu / Quit buttons   |
//!
//! [`GameStateMachine`] owns the mode, the round state, the target pool and
//! the high score.  The host calls three entry points and nothing else:
//! [`GameStateMachine::on_tick`] once per frame, [`GameStateMachine::on_input`]
//! per raw input event, and [`GameStateMachine::on_ui`] per button press.

use crate::arena::Arena;
use crate::constants::POINTS_PER_HIT;
use crate::high_score::HighScoreStore;
use crate::input::{Action, InputRouter, RawInput};
use crate::round::{ScoreTimer, TimerSignal};
use crate::targets::{Target, TargetPool};
use bevy::log::{debug, info};
use bevy::prelude::Resource;
use std::hash::Hash;

/// Which screen is active.  Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Requests coming from on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTrigger {
    Start,
    PlayAgain,
    ReturnToMenu,
    Quit,
}

/// Whether the host should keep running after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSettings {
    pub target_count: usize,
    pub round_seconds: f32,
}

#[derive(Resource)]
pub struct GameStateMachine<H: Copy + Eq + Hash + Send + Sync + 'static> {
    mode: GameMode,
    round: ScoreTimer,
    targets: TargetPool<H>,
    high_score: u32,
    store: HighScoreStore,
    settings: RoundSettings,
    router: InputRouter,
}

impl<H: Copy + Eq + Hash + Send + Sync + 'static> GameStateMachine<H> {
    /// Start in `Menu` with the persisted high score loaded.
    pub fn new(settings: RoundSettings, store: HighScoreStore, targets: TargetPool<H>) -> Self {
        let high_score = store.load();
        info!("High score {} loaded from {}", high_score, store.path().display());
        Self {
            mode: GameMode::Menu,
            round: ScoreTimer::default(),
            targets,
            high_score,
            store,
            settings,
            router: InputRouter::default(),
        }
    }

    pub fn with_router(mut self, router: InputRouter) -> Self {
        self.router = router;
        self
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn round(&self) -> &ScoreTimer {
        &self.round
    }

    pub fn targets(&self) -> &TargetPool<H> {
        &self.targets
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn settings(&self) -> RoundSettings {
        self.settings
    }

    // ── Host entry points ─────────────────────────────────────────────────────

    /// Advance the round clock and end the round when it runs out.
    pub fn on_tick<A: Arena<Handle = H>>(&mut self, dt: f32, arena: &mut A) {
        if self.mode != GameMode::Playing {
            return;
        }
        if self.round.tick(dt) == TimerSignal::Expired {
            self.end_round(arena);
        }
    }

    /// Route one raw input event and apply the resulting action, if any.
    pub fn on_input<A: Arena<Handle = H>>(&mut self, event: RawInput, arena: &mut A) -> Flow {
        match self.router.route(event, self.mode, &self.round) {
            Some(action) => self.apply(action, arena),
            None => Flow::Continue,
        }
    }

    /// Handle an on-screen button press.
    pub fn on_ui<A: Arena<Handle = H>>(&mut self, trigger: UiTrigger, arena: &mut A) -> Flow {
        match trigger {
            UiTrigger::Start => {
                self.start(arena);
            }
            UiTrigger::PlayAgain => {
                self.play_again(arena);
            }
            UiTrigger::ReturnToMenu => {
                self.return_to_menu(arena);
            }
            UiTrigger::Quit => return self.quit(),
        }
        Flow::Continue
    }

    pub fn apply<A: Arena<Handle = H>>(&mut self, action: Action, arena: &mut A) -> Flow {
        match action {
            Action::ResolveHit => {
                self.resolve_hit(arena);
            }
            Action::TogglePause => {
                self.toggle_pause(arena);
            }
            Action::Reset => {
                self.reset(arena);
            }
            Action::Quit => return self.quit(),
        }
        Flow::Continue
    }

    // ── Transitions ───────────────────────────────────────────────────────────
    //
    // Each returns `true` when it fired.  Triggers that are not valid in the
    // current mode are ignored.

    /// `Menu → Playing`.
    pub fn start<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> bool {
        if self.mode != GameMode::Menu {
            return false;
        }
        self.begin_round(arena);
        true
    }

    /// `GameOver → Playing`; same effects as [`Self::start`].
    pub fn play_again<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> bool {
        if self.mode != GameMode::GameOver {
            return false;
        }
        self.begin_round(arena);
        true
    }

    /// `Playing ⇄ Paused`.
    pub fn toggle_pause<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> bool {
        match self.mode {
            GameMode::Playing => {
                self.round.set_paused(true);
                arena.set_pointer_locked(false);
                self.mode = GameMode::Paused;
                info!("Paused with {:.1}s left", self.round.time_remaining());
                true
            }
            GameMode::Paused => {
                self.round.set_paused(false);
                arena.set_pointer_locked(true);
                self.mode = GameMode::Playing;
                info!("Resumed");
                true
            }
            _ => false,
        }
    }

    /// `Playing → Playing` with a fresh clock, score and target field.
    pub fn reset<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        self.round.reset(self.settings.round_seconds);
        self.targets.populate(self.settings.target_count, arena);
        arena.set_pointer_locked(true);
        info!("Round reset");
        true
    }

    /// `GameOver → Menu`.
    pub fn return_to_menu<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> bool {
        if self.mode != GameMode::GameOver {
            return false;
        }
        self.targets.clear(arena);
        arena.despawn_player();
        self.round.deactivate();
        self.mode = GameMode::Menu;
        info!("Returned to menu");
        true
    }

    /// Valid from any mode.
    pub fn quit(&self) -> Flow {
        info!("Quit requested");
        Flow::Quit
    }

    /// Destroy the hovered target, replace it, and score a point.
    ///
    /// Only live while playing, unpaused, with time on the clock.  Hovering
    /// nothing, or anything that is not a tracked target, is a miss.
    pub fn resolve_hit<A: Arena<Handle = H>>(&mut self, arena: &mut A) -> Option<Target<H>> {
        if self.mode != GameMode::Playing
            || self.round.is_paused()
            || self.round.time_remaining() <= 0.0
        {
            return None;
        }
        let handle = arena.hovered()?;
        let hit = self.targets.remove(handle, arena)?;
        self.targets.spawn(arena);
        self.round.add_score(POINTS_PER_HIT);
        debug!("Hit target {:?}; score {}", hit.id, self.round.score());
        Some(hit)
    }

    fn begin_round<A: Arena<Handle = H>>(&mut self, arena: &mut A) {
        self.round.reset(self.settings.round_seconds);
        self.targets.populate(self.settings.target_count, arena);
        arena.spawn_player();
        arena.set_pointer_locked(true);
        self.mode = GameMode::Playing;
        info!(
            "Round started: {} targets, {}s",
            self.settings.target_count, self.settings.round_seconds
        );
    }

    /// `Playing → GameOver`, persisting a beaten high score.
    fn end_round<A: Arena<Handle = H>>(&mut self, arena: &mut A) {
        self.round.deactivate();
        arena.set_pointer_locked(false);
        self.mode = GameMode::GameOver;

        let score = self.round.score();
        if score > self.high_score {
            self.high_score = score;
            self.store.save(score);
            info!("Round over: new high score {}", score);
        } else {
            info!("Round over: score {} (high score {})", score, self.high_score);
        }
    }
}
