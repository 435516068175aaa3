use bevy::prelude::*;
use clap::Parser;

use crate::game::resources::{FrameLimit, LevelLayout};

/// Command line options for a run
#[derive(Parser, Resource, Debug, Clone, PartialEq)]
#[command(name = "gauntlet-pickups", about = "Pickup, treasure and key sandbox")]
pub struct GameConfig {
    /// Run without a window, audio or particles
    #[arg(long)]
    pub headless: bool,

    /// Exit after this many frames
    #[arg(long)]
    pub frames: Option<u32>,

    /// Seed for treasure categories
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 12)]
    pub treasures: usize,

    #[arg(long, default_value_t = 2)]
    pub keys: usize,

    /// Multiplier applied to every treasure the session collects
    #[arg(long, default_value_t = 1.0)]
    pub score_multiplier: f32,
}

impl GameConfig {
    pub fn level_layout(&self) -> LevelLayout {
        LevelLayout {
            treasure_count: self.treasures,
            key_count: self.keys,
            seed: self.seed,
            score_multiplier: self.score_multiplier,
            ..default()
        }
    }

    pub fn frame_limit(&self) -> FrameLimit {
        FrameLimit(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::try_parse_from(["gauntlet-pickups"]).unwrap();

        assert!(!config.headless);
        assert_eq!(config.frames, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.treasures, 12);
        assert_eq!(config.keys, 2);
        assert_eq!(config.score_multiplier, 1.0);
    }

    #[test]
    fn test_headless_run_options() {
        let config = GameConfig::try_parse_from([
            "gauntlet-pickups",
            "--headless",
            "--frames",
            "600",
            "--seed",
            "42",
            "--treasures",
            "20",
            "--keys",
            "0",
            "--score-multiplier",
            "2.5",
        ])
        .unwrap();

        assert!(config.headless);
        assert_eq!(config.frame_limit(), FrameLimit(Some(600)));

        let layout = config.level_layout();
        assert_eq!(layout.treasure_count, 20);
        assert_eq!(layout.key_count, 0);
        assert_eq!(layout.seed, Some(42));
        assert_eq!(layout.score_multiplier, 2.5);
        assert_eq!(layout.ring_radius, LevelLayout::default().ring_radius);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(GameConfig::try_parse_from(["gauntlet-pickups", "--treasures", "-3"]).is_err());
        assert!(GameConfig::try_parse_from(["gauntlet-pickups", "--frames", "lots"]).is_err());
    }

    #[test]
    fn test_clap_definition_is_valid() {
        use clap::CommandFactory;
        GameConfig::command().debug_assert();
    }
}
