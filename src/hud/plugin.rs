use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::hud::systems::*;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), setup_progress_display)
        .add_systems(OnEnter(GameState::Paused), show_pause_banner)
        .add_systems(OnExit(GameState::Paused), hide_pause_banner)
        .add_systems(Update, update_progress_display.in_set(GameSet::Presentation));
}
