//! Bevy host for the game state machine.
//!
//! The machine lives in the [`CubeBlast`] resource.  Each `Update` frame runs,
//! in order:
//!
//! 1. [`input_system`]: mouse and keyboard presses → `on_input`.
//! 2. [`button_system`]: on-screen button presses → `on_ui`.
//! 3. [`round_tick_system`]: frame delta → `on_tick`.
//! 4. [`presentation_system`]: labels and visibility → widgets.
//!
//! Click routing runs before buttons so the click that presses "Start" is
//! still seen in `Menu` and never counts as a shot.

use crate::config::{load_game_config, GameConfig};
use crate::game::{Flow, GameMode, GameStateMachine};
use crate::high_score::HighScoreStore;
use crate::input::RawInput;
use crate::presentation::{PresentationAdapter, UiElement};
use crate::targets::TargetPool;
use crate::ui::UiParams;
use crate::world::ArenaParams;
use bevy::prelude::*;

/// The state machine as the app runs it: targets are entities.
pub type CubeBlast = GameStateMachine<Entity>;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_game_session.after(load_game_config))
            .add_systems(
                Update,
                (
                    input_system,
                    button_system,
                    round_tick_system,
                    presentation_system,
                )
                    .chain(),
            );
    }
}

/// Run condition: a round is live and unpaused.
pub fn round_in_play(game: Option<Res<CubeBlast>>) -> bool {
    game.is_some_and(|game| game.mode() == GameMode::Playing)
}

/// Build the state machine from the loaded config.  Reads the high score.
pub fn init_game_session(mut commands: Commands, config: Res<GameConfig>) {
    let game = CubeBlast::new(
        config.round_settings(),
        HighScoreStore::new(config.high_score_path.clone()),
        TargetPool::from_entropy(config.spawn_area()),
    );
    info!("Session ready (high score {})", game.high_score());
    commands.insert_resource(game);
}

// ── Update systems ────────────────────────────────────────────────────────────

pub fn input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<CubeBlast>,
    mut arena: ArenaParams,
    mut exit: MessageWriter<AppExit>,
) {
    for event in frame_inputs(&mouse, &keys) {
        if game.on_input(event, &mut arena) == Flow::Quit {
            exit.write(AppExit::Success);
            return;
        }
    }
}

/// This frame's presses: mouse buttons first, then keys in `KeyCode` order.
///
/// `ButtonInput` keeps presses in a hash set, so simultaneous keys are sorted
/// to resolve the same way every run (P before R, letters before Escape).
pub fn frame_inputs(
    mouse: &ButtonInput<MouseButton>,
    keys: &ButtonInput<KeyCode>,
) -> Vec<RawInput> {
    let mut pressed: Vec<KeyCode> = keys.get_just_pressed().copied().collect();
    pressed.sort();

    mouse
        .get_just_pressed()
        .map(|button| RawInput::Mouse(*button))
        .chain(pressed.into_iter().map(RawInput::Key))
        .collect()
}

#[allow(clippy::type_complexity)]
pub fn button_system(
    buttons: Query<(&Interaction, &UiElement), (Changed<Interaction>, With<Button>)>,
    mut game: ResMut<CubeBlast>,
    mut arena: ArenaParams,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, element) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(trigger) = PresentationAdapter::button_trigger(*element) else {
            continue;
        };
        if game.on_ui(trigger, &mut arena) == Flow::Quit {
            exit.write(AppExit::Success);
            return;
        }
    }
}

pub fn round_tick_system(time: Res<Time>, mut game: ResMut<CubeBlast>, mut arena: ArenaParams) {
    game.on_tick(time.delta_secs(), &mut arena);
}

pub fn presentation_system(game: Res<CubeBlast>, mut ui: UiParams) {
    PresentationAdapter::refresh(&*game, &mut ui);
}
