use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_hanabi::HanabiPlugin;
use clap::Parser;
use gauntlet_pickups::{
    audio_plugin, config::GameConfig, effects_plugin, game_plugin, hud_plugin, states::GameState,
};

fn main() {
    let config = GameConfig::parse();
    let mut app = App::new();

    if config.headless {
        app.add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
            LogPlugin::default(),
            StatesPlugin,
        ));
    } else {
        app.add_plugins((
            DefaultPlugins.build().disable::<bevy::audio::AudioPlugin>(),
            bevy_kira_audio::AudioPlugin,
            HanabiPlugin,
        ))
        .add_plugins((hud_plugin, audio_plugin, effects_plugin));
    }

    app.insert_resource(config.level_layout())
        .insert_resource(config.frame_limit())
        .insert_resource(config)
        .init_state::<GameState>()
        .add_plugins(game_plugin)
        .run();
}
