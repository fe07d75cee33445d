//! Per-round score and countdown.

/// What a single [`ScoreTimer::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// Nothing changed: paused, no round, or already expired.
    Idle,
    /// Time was consumed and some remains.
    Running,
    /// This tick brought the clock to zero.  Reported once per round.
    Expired,
}

/// Round state: score, remaining time and the pause flag.
///
/// `score` only grows between resets; `time_remaining` only shrinks and never
/// goes below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTimer {
    score: u32,
    time_remaining: f32,
    paused: bool,
    active: bool,
    expired: bool,
}

impl Default for ScoreTimer {
    /// An inactive timer; nothing happens until [`ScoreTimer::reset`].
    fn default() -> Self {
        Self {
            score: 0,
            time_remaining: 0.0,
            paused: false,
            active: false,
            expired: false,
        }
    }
}

impl ScoreTimer {
    /// Start a new round: score 0, full clock, unpaused.
    pub fn reset(&mut self, initial_time: f32) {
        *self = Self {
            score: 0,
            time_remaining: initial_time.max(0.0),
            paused: false,
            active: true,
            expired: false,
        };
    }

    /// Advance the clock by `dt` seconds of real time.
    pub fn tick(&mut self, dt: f32) -> TimerSignal {
        if !self.active || self.paused || self.expired {
            return TimerSignal::Idle;
        }
        // Ignore negative or NaN deltas.
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time_remaining = (self.time_remaining - dt).max(0.0);
        if self.time_remaining <= 0.0 {
            self.expired = true;
            TimerSignal::Expired
        } else {
            TimerSignal::Running
        }
    }

    pub fn add_score(&mut self, n: u32) {
        self.score = self.score.saturating_add(n);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Stop counting down without touching score or time (round over or abandoned).
    pub fn deactivate(&mut self) {
        self.active = false;
        self.paused = false;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Whole seconds shown on the HUD: `floor(max(0, time_remaining))`.
    pub fn display_seconds(&self) -> u32 {
        self.time_remaining.max(0.0).floor() as u32
    }
}
