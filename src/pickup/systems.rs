use bevy::prelude::*;

use crate::overlap::components::CollisionSphere;
use crate::overlap::events::OverlapBeginEvent;
use crate::pickup::components::*;
use crate::pickup::events::*;
use crate::progress::components::{Collector, PlayerProgress, ScoreMultiplier};

/// Collects active pickups that something started overlapping.
///
/// Inactive pickups and self-overlaps are ignored, which also swallows duplicate overlap
/// messages within one frame. A collected pickup is deactivated on the spot and either
/// gets a respawn timer or is marked for removal.
pub fn collect_overlapped_pickups(
    mut commands: Commands,
    mut overlaps: MessageReader<OverlapBeginEvent>,
    mut pickups: Query<&mut Pickup>,
    mut collected: MessageWriter<PickupCollectedEvent>,
) {
    for event in overlaps.read() {
        if event.other == event.target {
            continue;
        }

        let Ok(mut pickup) = pickups.get_mut(event.target) else {
            continue;
        };

        if !pickup.active {
            continue;
        }

        collected.write(PickupCollectedEvent {
            pickup: event.target,
            collector: event.other,
        });
        pickup.deactivate();

        if let Some(delay) = pickup.respawn_delay() {
            debug!(
                "Pickup {:?} collected by {:?}, respawning in {:.1}s",
                event.target,
                event.other,
                delay.as_secs_f32()
            );
            commands
                .entity(event.target)
                .try_insert(RespawnTimer::new(delay));
        } else {
            info!("Pickup {:?} collected by {:?}", event.target, event.other);
            commands.entity(event.target).try_insert(Consumed);
        }
    }
}

/// Runs the `Collectible` hook of every collected pickup carrying `T`.
///
/// Collectors without a session still consume the pickup but are credited nothing.
pub fn apply_collection_effects<T: Collectible>(
    mut collected: MessageReader<PickupCollectedEvent>,
    items: Query<&T>,
    collectors: Query<&Collector>,
    mut sessions: Query<(&mut PlayerProgress, Option<&ScoreMultiplier>)>,
) {
    for event in collected.read() {
        let Ok(item) = items.get(event.pickup) else {
            continue;
        };

        let Ok(collector) = collectors.get(event.collector) else {
            debug!("{:?} is not a collector, nothing credited", event.collector);
            continue;
        };

        let Ok((mut progress, multiplier)) = sessions.get_mut(collector.session) else {
            warn!(
                "Collector {:?} points at missing session {:?}",
                event.collector, collector.session
            );
            continue;
        };

        item.on_collected(&mut progress, multiplier.map_or(1.0, |m| m.0));
    }
}

/// Requests a sound at the pickup's position for each collected pickup that has one
pub fn queue_pickup_sounds(
    mut collected: MessageReader<PickupCollectedEvent>,
    pickups: Query<(&PickupSound, &Transform)>,
    mut sounds: MessageWriter<PlaySoundAt>,
) {
    for event in collected.read() {
        if let Ok((sound, transform)) = pickups.get(event.pickup) {
            sounds.write(PlaySoundAt {
                sound: sound.0.clone(),
                location: transform.translation,
            });
        }
    }
}

/// Counts down respawn timers and brings finished pickups back
pub fn tick_respawn_timers(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Pickup, &mut RespawnTimer)>,
    mut respawned: MessageWriter<PickupRespawnedEvent>,
) {
    for (entity, mut pickup, mut timer) in query.iter_mut() {
        timer.tick(time.delta());

        if timer.is_finished() {
            pickup.reactivate();
            commands.entity(entity).try_remove::<RespawnTimer>();
            respawned.write(PickupRespawnedEvent { pickup: entity });
            debug!("Pickup {:?} respawned", entity);
        }
    }
}

/// Starts the life span countdown of newly spawned pickups
pub fn arm_life_spans(mut commands: Commands, query: Query<(Entity, &Pickup), Added<Pickup>>) {
    for (entity, pickup) in query.iter() {
        if let Some(life_span) = pickup.life_span_duration() {
            commands.entity(entity).try_insert(LifeSpanTimer::new(life_span));
        }
    }
}

/// Despawns pickups whose life span ran out
pub fn tick_life_spans(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut LifeSpanTimer), With<Pickup>>,
    mut expired: MessageWriter<PickupExpiredEvent>,
) {
    for (entity, mut life_span) in query.iter_mut() {
        life_span.0.tick(time.delta());

        if life_span.0.is_finished() {
            expired.write(PickupExpiredEvent { pickup: entity });
            commands.entity(entity).try_despawn();
            info!("Pickup {:?} expired", entity);
        }
    }
}

/// Keeps visibility and overlap detection in step with the active flag.
///
/// Runs on every change to `Pickup`, so a direct `set_active` call gets the same treatment
/// as collection and respawn. Reactivating a pickup drops any pending respawn timer.
pub fn sync_pickup_presentation(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &Pickup,
            &mut Visibility,
            &mut CollisionSphere,
            Has<RespawnTimer>,
        ),
        Changed<Pickup>,
    >,
) {
    for (entity, pickup, mut visibility, mut sphere, respawn_pending) in query.iter_mut() {
        if pickup.active {
            *visibility = Visibility::Inherited;
            sphere.enabled = true;

            if respawn_pending {
                commands.entity(entity).try_remove::<RespawnTimer>();
            }
        } else {
            *visibility = Visibility::Hidden;
            sphere.enabled = false;
        }
    }
}

/// Removes permanently collected pickups from the world
pub fn despawn_consumed_pickups(mut commands: Commands, query: Query<Entity, With<Consumed>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}
