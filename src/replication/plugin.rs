use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::replication::events::ReplicatedFieldChanged;
use crate::replication::systems::*;

pub fn plugin(app: &mut App) {
    app.add_message::<ReplicatedFieldChanged>().add_systems(
        Update,
        (replicate_pickup_state, replicate_progress_state).in_set(GameSet::Presentation),
    );
}
