use bevy::prelude::*;

/// System sets for explicit ordering of game systems.
/// The plugin chains them in declaration order and gates them on `GameState::InGame`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Avatar movement
    Movement,
    /// Overlap detection between collectors and everything else
    Overlap,
    /// Respawn and life span timers
    Lifecycle,
    /// Turning overlaps into collections and door attempts
    Collection,
    /// Crediting collectors, sound requests
    Effects,
    /// Visibility, tints, replicated state
    Presentation,
    /// Despawning consumed entities
    Cleanup,
}
