//! Headless end-to-end tests for a full CubeBlast session.
//!
//! The state machine is driven through its public host entry points
//! (`on_input`, `on_ui`, `on_tick`) against an in-memory arena, so no window,
//! renderer or ECS world is needed.
//!
//! Covered scenarios:
//! 1. A fresh install starts in the menu with a high score of 0.
//! 2. A round ending on score 5 persists "5"; a later round of 3 leaves it.
//! 3. Pausing freezes the clock and disables shooting.
//! 4. Clicking empty space changes nothing.
//! 5. Reset mid-round restores a full clock, zero score and 20 targets.
//! 6. The target count never drops while shooting.
//! 7. Game over → menu → start reuses the avatar and clears the field.
//! 8. Quit is honoured from every mode.

use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;
use bevy::prelude::{Color, Vec3};
use cubeblast::arena::Arena;
use cubeblast::game::{Flow, GameMode, GameStateMachine, RoundSettings, UiTrigger};
use cubeblast::high_score::HighScoreStore;
use cubeblast::input::RawInput;
use cubeblast::targets::{SpawnArea, TargetPool};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TestArena {
    next: u32,
    boxes: HashMap<u32, Vec3>,
    crosshair: Option<u32>,
    pointer_locked: bool,
    player_spawns: u32,
    player_present: bool,
}

impl TestArena {
    /// Aim at some live box and return it.
    fn aim(&mut self) -> u32 {
        let handle = *self.boxes.keys().next().unwrap();
        self.crosshair = Some(handle);
        handle
    }
}

impl Arena for TestArena {
    type Handle = u32;

    fn spawn_box(&mut self, position: Vec3, _color: Color) -> u32 {
        self.next += 1;
        self.boxes.insert(self.next, position);
        self.next
    }

    fn destroy(&mut self, handle: u32) {
        self.boxes.remove(&handle);
        if self.crosshair == Some(handle) {
            self.crosshair = None;
        }
    }

    fn hovered(&mut self) -> Option<u32> {
        self.crosshair
    }

    fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    fn burst(&mut self, _position: Vec3, _color: Color) {}

    fn spawn_player(&mut self) {
        self.player_spawns += 1;
        self.player_present = true;
    }

    fn despawn_player(&mut self) {
        self.player_present = false;
    }
}

/// Empty per-test directory; returns the high-score path inside it.
fn high_score_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "cubeblast-flow-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir.join("highscore.txt")
}

fn new_game(path: &PathBuf) -> GameStateMachine<u32> {
    GameStateMachine::new(
        RoundSettings {
            target_count: 20,
            round_seconds: 60.0,
        },
        HighScoreStore::new(path),
        TargetPool::new(
            SpawnArea {
                half_extent: 8.0,
                height: 0.5,
                snap_to_grid: true,
            },
            StdRng::seed_from_u64(2024),
        ),
    )
}

fn click(game: &mut GameStateMachine<u32>, arena: &mut TestArena) -> Flow {
    game.on_input(RawInput::Mouse(MouseButton::Left), arena)
}

fn press(game: &mut GameStateMachine<u32>, arena: &mut TestArena, key: KeyCode) -> Flow {
    game.on_input(RawInput::Key(key), arena)
}

fn shoot(game: &mut GameStateMachine<u32>, arena: &mut TestArena, hits: u32) {
    for _ in 0..hits {
        arena.aim();
        click(game, arena);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn fresh_install_starts_in_menu_with_zero_high_score() {
    let path = high_score_path("fresh");
    let game = new_game(&path);
    assert_eq!(game.mode(), GameMode::Menu);
    assert_eq!(game.high_score(), 0);
    assert!(game.targets().is_empty());
}

#[test]
fn high_score_persists_only_when_beaten() {
    let path = high_score_path("persist");

    let mut game = new_game(&path);
    let mut arena = TestArena::default();
    game.on_ui(UiTrigger::Start, &mut arena);
    shoot(&mut game, &mut arena, 5);
    game.on_tick(60.0, &mut arena);
    assert_eq!(game.mode(), GameMode::GameOver);
    assert_eq!(game.high_score(), 5);
    assert_eq!(fs::read_to_string(&path).unwrap(), "5");

    // A new process reads the stored value back.
    let mut game = new_game(&path);
    let mut arena = TestArena::default();
    assert_eq!(game.high_score(), 5);
    game.on_ui(UiTrigger::Start, &mut arena);
    shoot(&mut game, &mut arena, 3);
    game.on_tick(60.0, &mut arena);
    assert_eq!(game.round().score(), 3);
    assert_eq!(game.high_score(), 5);
    assert_eq!(fs::read_to_string(&path).unwrap(), "5");
}

#[test]
fn pause_freezes_clock_and_blocks_shots() {
    let path = high_score_path("pause");
    let mut game = new_game(&path);
    let mut arena = TestArena::default();
    game.on_ui(UiTrigger::Start, &mut arena);
    game.on_tick(10.0, &mut arena);

    press(&mut game, &mut arena, KeyCode::KeyP);
    assert_eq!(game.mode(), GameMode::Paused);
    assert!(!arena.pointer_locked);

    game.on_tick(5.0, &mut arena);
    assert_eq!(game.round().time_remaining(), 50.0);

    arena.aim();
    click(&mut game, &mut arena);
    assert_eq!(game.round().score(), 0);

    press(&mut game, &mut arena, KeyCode::KeyP);
    assert_eq!(game.mode(), GameMode::Playing);
    assert!(arena.pointer_locked);
}

#[test]
fn clicking_empty_space_is_a_miss() {
    let path = high_score_path("miss");
    let mut game = new_game(&path);
    let mut arena = TestArena::default();
    game.on_ui(UiTrigger::Start, &mut arena);
    let before: Vec<u32> = {
        let mut handles: Vec<u32> = arena.boxes.keys().copied().collect();
        handles.sort();
        handles
    };

    assert_eq!(click(&mut game, &mut arena), Flow::Continue);

    let mut after: Vec<u32> = arena.boxes.keys().copied().collect();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(game.round().score(), 0);
}

#[test]
fn reset_restores_a_fresh_round() {
    let path = high_score_path("reset");
    let mut game = new_game(&path);
    let mut arena = TestArena::default();
    game.on_ui(UiTrigger::Start, &mut arena);
    shoot(&mut game, &mut arena, 10);
    game.on_tick(30.0, &mut arena);
    assert_eq!(game.round().score(), 10);
    assert_eq!(game.round().time_remaining(), 30.0);

    press(&mut game, &mut arena, KeyCode::KeyR);
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(game.round().score(), 0);
    assert_eq!(game.round().time_remaining(), 60.0);
    assert_eq!(game.targets().len(), 20);
    assert_eq!(arena.boxes.len(), 20);
}

#[test]
fn target_count_holds_while_shooting() {
    let path = high_score_path("count");
    let mut game = new_game(&path);
    let mut arena = TestArena::default();
    game.on_ui(UiTrigger::Start, &mut arena);

    for hits in 1..=30 {
        let aimed = arena.aim();
        click(&mut game, &mut arena);
        assert!(!game.targets().contains(aimed));
        assert_eq!(game.targets().len(), 20);
        assert_eq!(arena.boxes.len(), 20);
        assert_eq!(game.round().score(), hits);
    }
    for target in game.targets().iter() {
        assert!(game.targets().area().contains(target.position));
    }
}

#[test]
fn menu_round_trip_reuses_the_avatar() {
    let path = high_score_path("roundtrip");
    let mut game = new_game(&path);
    let mut arena = TestArena::default();

    game.on_ui(UiTrigger::Start, &mut arena);
    game.on_tick(60.0, &mut arena);
    game.on_ui(UiTrigger::ReturnToMenu, &mut arena);
    assert_eq!(game.mode(), GameMode::Menu);
    assert!(arena.boxes.is_empty());
    assert!(!arena.player_present);
    assert!(!arena.pointer_locked);

    game.on_ui(UiTrigger::Start, &mut arena);
    game.on_tick(60.0, &mut arena);
    game.on_ui(UiTrigger::PlayAgain, &mut arena);
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(arena.boxes.len(), 20);
    assert!(arena.player_present);
    assert_eq!(arena.player_spawns, 3);
}

#[test]
fn quit_is_honoured_from_every_mode() {
    let path = high_score_path("quit");
    let mut game = new_game(&path);
    let mut arena = TestArena::default();

    assert_eq!(press(&mut game, &mut arena, KeyCode::Escape), Flow::Quit);
    game.on_ui(UiTrigger::Start, &mut arena);
    assert_eq!(press(&mut game, &mut arena, KeyCode::Escape), Flow::Quit);
    press(&mut game, &mut arena, KeyCode::KeyP);
    assert_eq!(press(&mut game, &mut arena, KeyCode::Escape), Flow::Quit);
    press(&mut game, &mut arena, KeyCode::KeyP);
    game.on_tick(60.0, &mut arena);
    assert_eq!(game.on_ui(UiTrigger::Quit, &mut arena), Flow::Quit);
}
