use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::key::components::KeyPickup;
use crate::key::events::{DoorDeniedEvent, DoorOpenedEvent};
use crate::key::systems::open_locked_doors;
use crate::pickup::systems::apply_collection_effects;

pub fn plugin(app: &mut App) {
    app.add_message::<DoorOpenedEvent>()
        .add_message::<DoorDeniedEvent>()
        .add_systems(
            Update,
            (
                open_locked_doors.in_set(GameSet::Collection),
                apply_collection_effects::<KeyPickup>.in_set(GameSet::Effects),
            ),
        );
}
