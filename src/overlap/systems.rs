use bevy::prelude::*;
use std::collections::HashSet;

use crate::overlap::components::CollisionSphere;
use crate::overlap::events::OverlapBeginEvent;
use crate::overlap::resources::OverlapPairs;
use crate::progress::components::Collector;

/// Tests every collector sphere against every other enabled sphere and reports pairs that
/// started overlapping since the last pass.
///
/// Pairs that stop overlapping, get their sphere disabled, or lose an entity are dropped,
/// so a re-enabled sphere under a standing collector begins a fresh overlap.
pub fn detect_overlaps(
    collectors: Query<(Entity, &Transform, &CollisionSphere), With<Collector>>,
    targets: Query<(Entity, &Transform, &CollisionSphere), Without<Collector>>,
    mut pairs: ResMut<OverlapPairs>,
    mut overlaps: MessageWriter<OverlapBeginEvent>,
) {
    let mut current = HashSet::new();

    for (collector, collector_transform, collector_sphere) in collectors.iter() {
        if !collector_sphere.enabled {
            continue;
        }

        for (target, target_transform, target_sphere) in targets.iter() {
            if !target_sphere.enabled {
                continue;
            }

            if collector_sphere.overlaps(
                collector_transform.translation,
                target_sphere,
                target_transform.translation,
            ) {
                current.insert((target, collector));
            }
        }
    }

    for &(target, other) in current.difference(&pairs.0) {
        overlaps.write(OverlapBeginEvent { target, other });
    }

    pairs.0 = current;
}
