use bevy::prelude::*;

/// Message fired when a collector spends a key on a door
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorOpenedEvent {
    pub door: Entity,
    pub collector: Entity,
}

/// Message fired when a collector without keys touches a locked door
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorDeniedEvent {
    pub door: Entity,
    pub collector: Entity,
}
