//! State machine → UI widgets, and button presses → state machine.
//!
//! Every frame [`PresentationAdapter::refresh`] pushes the label strings and
//! per-widget visibility derived from the current mode:
//!
//! | Group          | Widgets                                          | Visible in          |
//! |----------------|--------------------------------------------------|---------------------|
//! | HUD            | score, timer, crosshair                          | `Playing`, `Paused` |
//! | Pause          | "PAUSED"                                         | `Paused`            |
//! | Menu           | title, Start, Quit                               | `Menu`              |
//! | Game over      | title, final score, high score, 3 buttons        | `GameOver`          |

use crate::game::{GameMode, GameStateMachine, UiTrigger};
use bevy::prelude::Component;
use std::hash::Hash;

/// Identifies one on-screen widget.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiElement {
    ScoreText,
    TimerText,
    Crosshair,
    PauseText,
    TitleText,
    StartButton,
    MenuQuitButton,
    GameOverText,
    FinalScoreText,
    HighScoreText,
    PlayAgainButton,
    ReturnToMenuButton,
    GameOverQuitButton,
}

impl UiElement {
    pub const ALL: [UiElement; 13] = [
        UiElement::ScoreText,
        UiElement::TimerText,
        UiElement::Crosshair,
        UiElement::PauseText,
        UiElement::TitleText,
        UiElement::StartButton,
        UiElement::MenuQuitButton,
        UiElement::GameOverText,
        UiElement::FinalScoreText,
        UiElement::HighScoreText,
        UiElement::PlayAgainButton,
        UiElement::ReturnToMenuButton,
        UiElement::GameOverQuitButton,
    ];

    /// Whether this widget is shown in `mode`.
    pub fn visible_in(self, mode: GameMode) -> bool {
        use UiElement::*;
        match self {
            ScoreText | TimerText | Crosshair => {
                matches!(mode, GameMode::Playing | GameMode::Paused)
            }
            PauseText => mode == GameMode::Paused,
            TitleText | StartButton | MenuQuitButton => mode == GameMode::Menu,
            GameOverText | FinalScoreText | HighScoreText | PlayAgainButton
            | ReturnToMenuButton | GameOverQuitButton => mode == GameMode::GameOver,
        }
    }
}

/// The widget side of the UI collaborator.
pub trait UiSurface {
    fn set_text(&mut self, element: UiElement, text: &str);
    fn set_enabled(&mut self, element: UiElement, enabled: bool);
}

pub struct PresentationAdapter;

impl PresentationAdapter {
    pub fn score_text(score: u32) -> String {
        format!("Score: {score}")
    }

    pub fn timer_text(seconds: u32) -> String {
        format!("Time: {seconds}")
    }

    pub fn final_score_text(score: u32) -> String {
        format!("Final Score: {score}")
    }

    pub fn high_score_text(high_score: u32) -> String {
        format!("High Score: {high_score}")
    }

    /// Push labels and visibility for the machine's current state.
    pub fn refresh<H, S>(game: &GameStateMachine<H>, surface: &mut S)
    where
        H: Copy + Eq + Hash + Send + Sync + 'static,
        S: UiSurface + ?Sized,
    {
        let round = game.round();
        surface.set_text(UiElement::ScoreText, &Self::score_text(round.score()));
        surface.set_text(
            UiElement::TimerText,
            &Self::timer_text(round.display_seconds()),
        );
        surface.set_text(
            UiElement::FinalScoreText,
            &Self::final_score_text(round.score()),
        );
        surface.set_text(
            UiElement::HighScoreText,
            &Self::high_score_text(game.high_score()),
        );

        let mode = game.mode();
        for element in UiElement::ALL {
            surface.set_enabled(element, element.visible_in(mode));
        }
    }

    /// The trigger a button stands for; `None` for non-button widgets.
    pub fn button_trigger(element: UiElement) -> Option<UiTrigger> {
        match element {
            UiElement::StartButton => Some(UiTrigger::Start),
            UiElement::PlayAgainButton => Some(UiTrigger::PlayAgain),
            UiElement::ReturnToMenuButton => Some(UiTrigger::ReturnToMenu),
            UiElement::MenuQuitButton | UiElement::GameOverQuitButton => Some(UiTrigger::Quit),
            _ => None,
        }
    }
}
