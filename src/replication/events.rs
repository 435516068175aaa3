use bevy::prelude::*;

/// A replicated field together with its new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicatedField {
    Active(bool),
    Score(u32),
    TreasureCount(u32),
    KeyCount(u32),
}

/// Message fired when a replicated field is first seen or changes value.
/// Whatever transports state to remote observers listens to this.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicatedFieldChanged {
    pub entity: Entity,
    pub field: ReplicatedField,
}
