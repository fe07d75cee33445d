use bevy::prelude::*;
use bevy::window::WindowResolution;
use cubeblast::config::{self, GameConfig};
use cubeblast::particles::ParticlesPlugin;
use cubeblast::player::PlayerPlugin;
use cubeblast::session::SessionPlugin;
use cubeblast::ui::UiPlugin;
use cubeblast::world::WorldPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "CubeBlast".into(),
                resolution: WindowResolution::new(1280, 720),
                ..Default::default()
            }),
            ..Default::default()
        }))
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present).  Startup systems that read the config
        // are ordered after it.
        .insert_resource(GameConfig::default())
        .add_systems(Startup, config::load_game_config)
        .add_plugins((
            WorldPlugin,
            ParticlesPlugin,
            PlayerPlugin,
            UiPlugin,
            SessionPlugin,
        ))
        .run();
}
