use bevy::prelude::*;

/// Message fired when `other` starts overlapping `target`.
///
/// Written by the overlap detector, but any system acting as a collision source may write
/// it directly.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapBeginEvent {
    pub target: Entity,
    pub other: Entity,
}
