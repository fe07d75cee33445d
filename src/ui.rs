//! On-screen widgets: HUD, menu and game-over screen.
//!
//! Every widget is spawned once at startup and tagged with its
//! [`UiElement`]; [`crate::presentation::PresentationAdapter`] decides what
//! is shown.  [`UiParams`] is the Bevy side of [`UiSurface`]: "enabled" is
//! `Node::display`, text is the entity's own [`Text`].
//!
//! Layout:
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Score: 3                           Time: 42 │
//! │                                             │
//! │                 CubeBlast                   │
//! │               [ Start Game ]                │
//! │                  [ Quit ]                   │
//! │                     +                       │
//! └─────────────────────────────────────────────┘
//! ```

use crate::config::GameConfig;
use crate::presentation::{UiElement, UiSurface};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
fn menu_bg() -> Color {
    Color::srgb(0.08, 0.16, 0.36)
}
fn menu_border() -> Color {
    Color::srgb(0.22, 0.44, 0.78)
}
fn menu_text() -> Color {
    Color::srgb(0.65, 0.80, 1.0)
}
fn title_color() -> Color {
    Color::srgb(0.0, 0.5, 1.0)
}
fn timer_color() -> Color {
    Color::srgb(1.0, 0.92, 0.25)
}
fn alert_color() -> Color {
    Color::srgb(1.0, 0.22, 0.22)
}
fn high_score_color() -> Color {
    Color::srgb(1.0, 0.60, 0.10)
}

/// Resting colour of a button's label; restored when the pointer leaves.
#[derive(Component, Clone, Copy)]
pub struct ButtonLabelColor(pub Color);

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (setup_hud, setup_main_menu, setup_game_over)
                .after(crate::config::load_game_config),
        )
        .add_systems(Update, button_hover_system);
    }
}

// ── Startup: widgets ──────────────────────────────────────────────────────────

/// Score (top-left), timer (top-right), crosshair and pause banner.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>) {
    let font = TextFont {
        font_size: config.hud_font_size,
        ..default()
    };

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            display: Display::None,
            ..default()
        },
        Text::new("Score: 0"),
        font.clone(),
        TextColor(Color::WHITE),
        UiElement::ScoreText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(12.0),
            display: Display::None,
            ..default()
        },
        Text::new("Time: 0"),
        font.clone(),
        TextColor(timer_color()),
        UiElement::TimerText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            display: Display::None,
            ..default()
        },
        Pickable::IGNORE,
        UiElement::Crosshair,
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new("+"),
            TextFont {
                font_size: 32.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            top: Val::Percent(30.0),
            justify_content: JustifyContent::Center,
            display: Display::None,
            ..default()
        },
        Pickable::IGNORE,
        UiElement::PauseText,
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new("PAUSED"),
            TextFont {
                font_size: 64.0,
                ..default()
            },
            TextColor(alert_color()),
        ));
    });
}

/// Title plus Start Game and Quit buttons.
pub fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((screen_column(), Pickable::IGNORE))
        .with_children(|root| {
            root.spawn((
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    display: Display::None,
                    ..default()
                },
                Text::new("CubeBlast"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
                UiElement::TitleText,
            ));
            button(
                root,
                "Start Game",
                UiElement::StartButton,
                start_bg(),
                start_border(),
                start_text(),
            );
            button(
                root,
                "Quit",
                UiElement::MenuQuitButton,
                quit_bg(),
                quit_border(),
                quit_text(),
            );
        });
}

/// "GAME OVER", final and high score, and the three exit buttons.
pub fn setup_game_over(mut commands: Commands) {
    commands
        .spawn((screen_column(), Pickable::IGNORE))
        .with_children(|root| {
            root.spawn((
                Node {
                    display: Display::None,
                    ..default()
                },
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(alert_color()),
                UiElement::GameOverText,
            ));
            root.spawn((
                Node {
                    margin: UiRect::top(Val::Px(16.0)),
                    display: Display::None,
                    ..default()
                },
                Text::new("Final Score: 0"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                UiElement::FinalScoreText,
            ));
            root.spawn((
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    display: Display::None,
                    ..default()
                },
                Text::new("High Score: 0"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(high_score_color()),
                UiElement::HighScoreText,
            ));
            button(
                root,
                "Play Again",
                UiElement::PlayAgainButton,
                start_bg(),
                start_border(),
                start_text(),
            );
            button(
                root,
                "Return to Menu",
                UiElement::ReturnToMenuButton,
                menu_bg(),
                menu_border(),
                menu_text(),
            );
            button(
                root,
                "Quit",
                UiElement::GameOverQuitButton,
                quit_bg(),
                quit_border(),
                quit_text(),
            );
        });
}

/// Full-screen centred column; holds widgets but is never hidden itself.
fn screen_column() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        row_gap: Val::Px(12.0),
        ..default()
    }
}

/// Spawn a hidden labelled button tagged with `element`.
fn button(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    element: UiElement,
    bg: Color,
    border: Color,
    text: Color,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(240.0),
                height: Val::Px(50.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor(bg),
            BorderColor::all(border),
            ButtonLabelColor(text),
            element,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(text),
            ));
        });
}

// ── UiSurface implementation ──────────────────────────────────────────────────

#[derive(SystemParam)]
pub struct UiParams<'w, 's> {
    widgets: Query<'w, 's, (&'static UiElement, &'static mut Node, Option<&'static mut Text>)>,
}

impl UiSurface for UiParams<'_, '_> {
    fn set_text(&mut self, element: UiElement, text: &str) {
        for (tag, _, label) in self.widgets.iter_mut() {
            if *tag != element {
                continue;
            }
            // Only write on change so Bevy does not re-layout every frame.
            if let Some(mut label) = label {
                if label.0 != text {
                    label.0 = text.to_string();
                }
            }
        }
    }

    fn set_enabled(&mut self, element: UiElement, enabled: bool) {
        let display = if enabled { Display::Flex } else { Display::None };
        for (tag, mut node, _) in self.widgets.iter_mut() {
            if *tag == element && node.display != display {
                node.display = display;
            }
        }
    }
}

// ── Update: hover feedback ────────────────────────────────────────────────────

/// Brighten a button's label while hovered.
#[allow(clippy::type_complexity)]
pub fn button_hover_system(
    buttons: Query<
        (&Interaction, &Children, &ButtonLabelColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut labels: Query<&mut TextColor>,
) {
    for (interaction, children, resting) in buttons.iter() {
        let color = match interaction {
            Interaction::Hovered | Interaction::Pressed => Color::WHITE,
            Interaction::None => resting.0,
        };
        for child in children.iter() {
            if let Ok(mut text_color) = labels.get_mut(child) {
                *text_color = TextColor(color);
            }
        }
    }
}
