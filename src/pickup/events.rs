use bevy::prelude::*;

/// Message fired when a pickup is collected. Collection hooks run off this message.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupCollectedEvent {
    pub pickup: Entity,
    pub collector: Entity,
}

/// Message fired when a respawn timer brings a pickup back
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRespawnedEvent {
    pub pickup: Entity,
}

/// Message fired when a pickup's life span runs out and it is despawned
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupExpiredEvent {
    pub pickup: Entity,
}

/// Request for the audio side to play `sound` at `location`
#[derive(Message, Debug, Clone, PartialEq)]
pub struct PlaySoundAt {
    pub sound: String,
    pub location: Vec3,
}
