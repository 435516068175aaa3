use bevy::prelude::*;

use crate::pickup::components::Pickup;
use crate::progress::components::PlayerProgress;
use crate::replication::components::*;
use crate::replication::events::*;

/// Reports the `active` flag of pickups the first time they are seen and whenever it
/// differs from the last reported value
pub fn replicate_pickup_state(
    mut commands: Commands,
    mut query: Query<(Entity, &Pickup, Option<&mut PickupReplica>), Changed<Pickup>>,
    mut changes: MessageWriter<ReplicatedFieldChanged>,
) {
    for (entity, pickup, replica) in query.iter_mut() {
        match replica {
            Some(mut replica) => {
                if replica.active != pickup.active {
                    replica.active = pickup.active;
                    changes.write(ReplicatedFieldChanged {
                        entity,
                        field: ReplicatedField::Active(pickup.active),
                    });
                }
            }
            None => {
                commands.entity(entity).try_insert(PickupReplica {
                    active: pickup.active,
                });
                changes.write(ReplicatedFieldChanged {
                    entity,
                    field: ReplicatedField::Active(pickup.active),
                });
            }
        }
    }
}

/// Reports score, treasure count and key count of sessions, field by field
pub fn replicate_progress_state(
    mut commands: Commands,
    mut query: Query<
        (Entity, &PlayerProgress, Option<&mut ProgressReplica>),
        Changed<PlayerProgress>,
    >,
    mut changes: MessageWriter<ReplicatedFieldChanged>,
) {
    for (entity, progress, replica) in query.iter_mut() {
        let current = ProgressReplica {
            score: progress.score(),
            treasure_count: progress.treasure_count(),
            key_count: progress.key_count(),
        };

        let previous = match replica {
            Some(mut replica) => {
                let previous = *replica;
                *replica = current;
                Some(previous)
            }
            None => {
                commands.entity(entity).try_insert(current);
                None
            }
        };

        let fields = [
            (
                previous.map(|p| p.score),
                current.score,
                ReplicatedField::Score(current.score),
            ),
            (
                previous.map(|p| p.treasure_count),
                current.treasure_count,
                ReplicatedField::TreasureCount(current.treasure_count),
            ),
            (
                previous.map(|p| p.key_count),
                current.key_count,
                ReplicatedField::KeyCount(current.key_count),
            ),
        ];

        for (before, now, field) in fields {
            if before != Some(now) {
                changes.write(ReplicatedFieldChanged { entity, field });
            }
        }
    }
}
