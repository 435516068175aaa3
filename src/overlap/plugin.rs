use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::overlap::events::OverlapBeginEvent;
use crate::overlap::resources::OverlapPairs;
use crate::overlap::systems::detect_overlaps;

pub fn plugin(app: &mut App) {
    app.add_message::<OverlapBeginEvent>()
        .init_resource::<OverlapPairs>()
        .add_systems(Update, detect_overlaps.in_set(GameSet::Overlap));
}
