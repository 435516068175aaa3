use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::pickup::systems::apply_collection_effects;
use crate::treasure::components::TreasurePickup;
use crate::treasure::systems::*;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            apply_collection_effects::<TreasurePickup>.in_set(GameSet::Effects),
            (refresh_treasure_appearance, apply_pickup_tints)
                .chain()
                .in_set(GameSet::Presentation),
        ),
    );
}
