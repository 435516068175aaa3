use bevy::prelude::*;

/// Score and inventory counters for one player session.
///
/// Lives on a session entity rather than on the avatar, so it survives the avatar being
/// despawned and respawned. Counters only grow except `key_count`, which `use_key` spends.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProgress {
    score: u32,
    treasure_count: u32,
    key_count: u32,
    high_score: u32,
}

impl PlayerProgress {
    /// Credit a treasure worth `points`, scaled by `multiplier`.
    ///
    /// Non-positive `points` are ignored. The scaled value is rounded half up, and every
    /// accepted call counts as one collected treasure.
    pub fn add_points(&mut self, points: i32, multiplier: f32) {
        if points <= 0 {
            return;
        }

        let delta = (points as f64 * multiplier as f64 + 0.5).floor() as i64;
        self.score = (self.score as i64 + delta).clamp(0, u32::MAX as i64) as u32;
        self.treasure_count = self.treasure_count.saturating_add(1);
        self.high_score = self.high_score.max(self.score);
    }

    pub fn add_keys(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.key_count = self.key_count.saturating_add(amount as u32);
    }

    /// Spend one key. Returns false, leaving state untouched, when none are held.
    pub fn use_key(&mut self) -> bool {
        if self.key_count > 0 {
            self.key_count -= 1;
            true
        } else {
            false
        }
    }

    /// Start a fresh run: score and counters go back to zero, the high score stays.
    pub fn start_new_run(&mut self) {
        *self = Self {
            high_score: self.high_score,
            ..Self::default()
        };
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn treasure_count(&self) -> u32 {
        self.treasure_count
    }

    pub fn key_count(&self) -> u32 {
        self.key_count
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}

/// Marks an entity that can collect pickups, pointing at the session holding its progress.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collector {
    pub session: Entity,
}

/// Multiplier applied to treasure points credited to a session
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ScoreMultiplier(pub f32);

impl Default for ScoreMultiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

/// The session shown on this machine's HUD
#[derive(Component, Debug, Default)]
pub struct LocalPlayer;
