//! Raw input → game action mapping.
//!
//! The router is pure: it looks at the current mode and round state and
//! decides which, if any, [`Action`] an event stands for.  Unbound keys and
//! events that are not valid in the current mode map to `None`.

use crate::game::GameMode;
use crate::round::ScoreTimer;
use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;

/// One input occurrence as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    Mouse(MouseButton),
    Key(KeyCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ResolveHit,
    TogglePause,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub fire: MouseButton,
    pub pause: KeyCode,
    pub reset: KeyCode,
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            fire: MouseButton::Left,
            pause: KeyCode::KeyP,
            reset: KeyCode::KeyR,
            quit: KeyCode::Escape,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    bindings: KeyBindings,
}

impl InputRouter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> KeyBindings {
        self.bindings
    }

    pub fn route(&self, event: RawInput, mode: GameMode, round: &ScoreTimer) -> Option<Action> {
        let b = &self.bindings;
        match event {
            RawInput::Mouse(button) if button == b.fire => {
                let live = mode == GameMode::Playing
                    && !round.is_paused()
                    && round.time_remaining() > 0.0;
                live.then_some(Action::ResolveHit)
            }
            RawInput::Key(key) if key == b.quit => Some(Action::Quit),
            RawInput::Key(key) if key == b.pause => {
                matches!(mode, GameMode::Playing | GameMode::Paused).then_some(Action::TogglePause)
            }
            RawInput::Key(key) if key == b.reset => {
                (mode == GameMode::Playing).then_some(Action::Reset)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [GameMode; 4] = [
        GameMode::Menu,
        GameMode::Playing,
        GameMode::Paused,
        GameMode::GameOver,
    ];

    fn live_round() -> ScoreTimer {
        let mut t = ScoreTimer::default();
        t.reset(60.0);
        t
    }

    fn click() -> RawInput {
        RawInput::Mouse(MouseButton::Left)
    }

    #[test]
    fn click_only_resolves_while_playing_with_time_left() {
        let router = InputRouter::default();
        let round = live_round();
        for mode in ALL_MODES {
            let expected = (mode == GameMode::Playing).then_some(Action::ResolveHit);
            assert_eq!(router.route(click(), mode, &round), expected, "{mode:?}");
        }
    }

    #[test]
    fn click_is_dead_when_paused_or_out_of_time() {
        let router = InputRouter::default();
        let mut paused = live_round();
        paused.set_paused(true);
        assert_eq!(router.route(click(), GameMode::Playing, &paused), None);

        let mut expired = live_round();
        expired.tick(120.0);
        assert_eq!(router.route(click(), GameMode::Playing, &expired), None);
    }

    #[test]
    fn pause_key_only_in_playing_or_paused() {
        let router = InputRouter::default();
        let round = live_round();
        let key = RawInput::Key(KeyCode::KeyP);
        assert_eq!(router.route(key, GameMode::Playing, &round), Some(Action::TogglePause));
        assert_eq!(router.route(key, GameMode::Paused, &round), Some(Action::TogglePause));
        assert_eq!(router.route(key, GameMode::Menu, &round), None);
        assert_eq!(router.route(key, GameMode::GameOver, &round), None);
    }

    #[test]
    fn reset_key_only_in_playing() {
        let router = InputRouter::default();
        let round = live_round();
        let key = RawInput::Key(KeyCode::KeyR);
        for mode in ALL_MODES {
            let expected = (mode == GameMode::Playing).then_some(Action::Reset);
            assert_eq!(router.route(key, mode, &round), expected, "{mode:?}");
        }
    }

    #[test]
    fn quit_key_always_routes() {
        let router = InputRouter::default();
        let round = ScoreTimer::default();
        for mode in ALL_MODES {
            assert_eq!(
                router.route(RawInput::Key(KeyCode::Escape), mode, &round),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn unmapped_events_are_ignored() {
        let router = InputRouter::default();
        let round = live_round();
        for mode in ALL_MODES {
            assert_eq!(router.route(RawInput::Key(KeyCode::KeyQ), mode, &round), None);
            assert_eq!(router.route(RawInput::Mouse(MouseButton::Right), mode, &round), None);
        }
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let router = InputRouter::new(KeyBindings {
            pause: KeyCode::Space,
            ..Default::default()
        });
        let round = live_round();
        assert_eq!(
            router.route(RawInput::Key(KeyCode::Space), GameMode::Playing, &round),
            Some(Action::TogglePause)
        );
        assert_eq!(
            router.route(RawInput::Key(KeyCode::KeyP), GameMode::Playing, &round),
            None
        );
    }
}
