use bevy::prelude::*;

use crate::overlap::components::CollisionSphere;
use crate::pickup::components::{Collectible, Pickup};
use crate::progress::components::PlayerProgress;

/// Pickup that adds keys to the collector's session
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[require(Pickup)]
pub struct KeyPickup {
    pub amount: i32,
}

impl Default for KeyPickup {
    fn default() -> Self {
        Self { amount: 1 }
    }
}

impl Collectible for KeyPickup {
    fn on_collected(&self, progress: &mut PlayerProgress, _score_multiplier: f32) {
        progress.add_keys(self.amount);
    }
}

/// Door that opens for a collector able to spend a key
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[require(Transform, Visibility, CollisionSphere)]
pub struct LockedDoor {
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_pickup_defaults_to_one_key() {
        assert_eq!(KeyPickup::default().amount, 1);
    }

    #[test]
    fn collecting_key_adds_keys_and_ignores_multiplier() {
        let mut progress = PlayerProgress::default();
        KeyPickup { amount: 2 }.on_collected(&mut progress, 3.0);

        assert_eq!(progress.key_count(), 2);
        assert_eq!(progress.score(), 0);
        assert_eq!(progress.treasure_count(), 0);
    }

    #[test]
    fn spawned_key_is_a_non_respawning_pickup() {
        let mut world = World::new();
        let entity = world.spawn(KeyPickup::default()).id();

        let pickup = world.get::<Pickup>(entity).unwrap();
        assert!(pickup.active);
        assert!(!pickup.respawns());
    }

    #[test]
    fn door_starts_closed() {
        assert!(!LockedDoor::default().open);
    }
}
