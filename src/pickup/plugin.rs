use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::pickup::events::*;
use crate::pickup::systems::*;

pub fn plugin(app: &mut App) {
    app.add_message::<PickupCollectedEvent>()
        .add_message::<PickupRespawnedEvent>()
        .add_message::<PickupExpiredEvent>()
        .add_message::<PlaySoundAt>()
        .add_systems(
            Update,
            (
                // Timers tick before collection so a freshly armed timer waits a full frame
                (tick_respawn_timers, tick_life_spans, arm_life_spans)
                    .chain()
                    .in_set(GameSet::Lifecycle),
                collect_overlapped_pickups.in_set(GameSet::Collection),
                queue_pickup_sounds.in_set(GameSet::Effects),
                sync_pickup_presentation.in_set(GameSet::Presentation),
                despawn_consumed_pickups.in_set(GameSet::Cleanup),
            ),
        );
}
