use bevy::prelude::*;

use crate::game::resources::*;
use crate::game::sets::GameSet;
use crate::game::systems::*;
use crate::states::*;
use crate::{key, overlap, pickup, replication, treasure};

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Movement,
            GameSet::Overlap,
            GameSet::Lifecycle,
            GameSet::Collection,
            GameSet::Effects,
            GameSet::Presentation,
            GameSet::Cleanup,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    )
    .init_resource::<LevelLayout>()
    .init_resource::<FrameLimit>()
    .add_plugins((
        overlap::plugin,
        pickup::plugin,
        treasure::plugin,
        key::plugin,
        replication::plugin,
    ))
    .add_systems(Startup, start_game)
    .add_systems(OnEnter(GameState::InGame), setup_level)
    .add_systems(OnEnter(GameState::Intro), cleanup_level)
    .add_systems(Update, (game_input, exit_after_frame_limit))
    .add_systems(Update, patrol_avatars.in_set(GameSet::Movement));
}
