use bevy::prelude::*;

use crate::effects::systems::*;
use crate::game::sets::GameSet;

/// Needs `HanabiPlugin` in the app for the sparkles to show
pub fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_pickup_sparkle_effect)
        .add_systems(Update, attach_pickup_sparkles.in_set(GameSet::Presentation));
}
