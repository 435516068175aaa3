use bevy::prelude::*;
use std::time::Duration;

use crate::overlap::components::CollisionSphere;
use crate::progress::components::PlayerProgress;

/// A collectible world entity with an active/inactive lifecycle.
///
/// What collecting it does is decided by the other components on the entity: a pickup with
/// only this component is generic and runs the lifecycle alone.
#[derive(Component, Debug, Clone, PartialEq)]
#[require(Transform, Visibility, CollisionSphere)]
pub struct Pickup {
    /// Whether the pickup can be collected right now
    pub active: bool,
    pub should_respawn: bool,
    /// Seconds until a collected pickup comes back. Zero or less never respawns, and neither
    /// does a time too large for a `Duration`.
    pub respawn_time: f32,
    /// Importance hint for UI indicators
    pub priority: i32,
    /// Seconds before the pickup despawns on its own, collected or not
    pub life_span: Option<f32>,
}

impl Default for Pickup {
    fn default() -> Self {
        Self {
            active: true,
            should_respawn: false,
            respawn_time: 0.0,
            priority: 1,
            life_span: None,
        }
    }
}

impl Pickup {
    /// A pickup that comes back `respawn_time` seconds after being collected
    pub fn respawning(respawn_time: f32) -> Self {
        Self {
            should_respawn: true,
            respawn_time,
            ..default()
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_life_span(mut self, seconds: f32) -> Self {
        self.life_span = Some(seconds);
        self
    }

    /// Whether collecting this pickup arms a respawn rather than removing it for good
    pub fn respawns(&self) -> bool {
        self.respawn_delay().is_some()
    }

    /// Delay before a collected pickup comes back. `None` when it never does, which includes
    /// times too large to represent.
    pub fn respawn_delay(&self) -> Option<Duration> {
        if !self.should_respawn {
            return None;
        }
        positive_duration(self.respawn_time)
    }

    /// Time until the pickup despawns on its own, `None` when it never expires
    pub fn life_span_duration(&self) -> Option<Duration> {
        self.life_span.and_then(positive_duration)
    }

    /// Returns true if the pickup was active
    pub fn deactivate(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    /// Returns true if the pickup was inactive
    pub fn reactivate(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

fn positive_duration(seconds: f32) -> Option<Duration> {
    if seconds > 0.0 {
        Duration::try_from_secs_f32(seconds).ok()
    } else {
        None
    }
}

/// One-shot timer that reactivates a collected pickup. Despawning the pickup cancels it.
#[derive(Component, Debug, Clone)]
pub struct RespawnTimer(pub Timer);

impl RespawnTimer {
    pub fn new(delay: Duration) -> Self {
        Self(Timer::new(delay, TimerMode::Once))
    }

    pub fn tick(&mut self, delta: Duration) {
        self.0.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

/// Counts down a pickup's life span
#[derive(Component, Debug, Clone)]
pub struct LifeSpanTimer(pub Timer);

impl LifeSpanTimer {
    pub fn new(life_span: Duration) -> Self {
        Self(Timer::new(life_span, TimerMode::Once))
    }
}

/// Marker for a permanently collected pickup awaiting despawn at the end of the frame
#[derive(Component, Debug)]
pub struct Consumed;

/// Display color requested from the rendering side
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PickupTint(pub Color);

/// Sound played where the pickup was collected
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PickupSound(pub String);

/// Per-variant collection behaviour.
///
/// Each implementation gets its own `apply_collection_effects::<T>` system, so a pickup
/// carrying the component is credited to the collector's session when collected.
pub trait Collectible: Component {
    fn on_collected(&self, progress: &mut PlayerProgress, score_multiplier: f32);
}
