use bevy::prelude::*;

/// Last replicated values of a pickup
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PickupReplica {
    pub active: bool,
}

/// Last replicated values of a session's progress
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReplica {
    pub score: u32,
    pub treasure_count: u32,
    pub key_count: u32,
}
