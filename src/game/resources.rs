use bevy::prelude::*;

/// What the demo level spawns
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub treasure_count: usize,
    pub key_count: usize,
    /// Radius of the ring the pickups sit on and the avatar walks
    pub ring_radius: f32,
    /// Avatar speed in radians per second
    pub patrol_speed: f32,
    /// Fixed seed for treasure categories, random when unset
    pub seed: Option<u64>,
    pub score_multiplier: f32,
    /// Seconds the unreachable bonus pickup in the middle lasts
    pub bonus_life_span: f32,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            treasure_count: 12,
            key_count: 2,
            ring_radius: 600.0,
            patrol_speed: 0.5,
            seed: None,
            score_multiplier: 1.0,
            bonus_life_span: 10.0,
        }
    }
}

impl LevelLayout {
    /// Keys, treasure and the door share the ring
    pub fn ring_slots(&self) -> usize {
        self.key_count + self.treasure_count + 1
    }
}

/// Frames to run before exiting, unlimited when unset
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameLimit(pub Option<u32>);
