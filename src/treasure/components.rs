use bevy::prelude::*;

use crate::overlap::components::CollisionSphere;
use crate::pickup::components::{Collectible, Pickup};
use crate::progress::components::PlayerProgress;

pub const TREASURE_RESPAWN_SECS: f32 = 30.0;
pub const TREASURE_PRIORITY: i32 = 5;
pub const TREASURE_SPHERE_RADIUS: f32 = 40.0;

/// The kinds of treasure, each with a fixed point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TreasureCategory {
    #[default]
    None,
    Gold,
    Silver,
    Bronze,
    Gem,
    Chest,
}

impl TreasureCategory {
    pub const ALL: [TreasureCategory; 6] = [
        TreasureCategory::None,
        TreasureCategory::Gold,
        TreasureCategory::Silver,
        TreasureCategory::Bronze,
        TreasureCategory::Gem,
        TreasureCategory::Chest,
    ];

    pub fn point_value(&self) -> i32 {
        match self {
            TreasureCategory::Gold => 100,
            TreasureCategory::Silver => 50,
            TreasureCategory::Bronze => 25,
            TreasureCategory::Gem => 200,
            TreasureCategory::Chest => 500,
            TreasureCategory::None => 10,
        }
    }

    /// Display color for auto appearance
    pub fn tint(&self) -> Color {
        match self {
            TreasureCategory::Gold => Color::linear_rgb(1.0, 0.8, 0.0),
            TreasureCategory::Silver => Color::linear_rgb(0.75, 0.75, 0.75),
            TreasureCategory::Bronze => Color::linear_rgb(0.8, 0.5, 0.2),
            TreasureCategory::Gem => Color::linear_rgb(0.0, 0.5, 1.0), // Blue gem
            TreasureCategory::Chest => Color::linear_rgb(0.5, 0.25, 0.0), // Brown chest
            TreasureCategory::None => Color::WHITE,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TreasureCategory::Gold => "Gold",
            TreasureCategory::Silver => "Silver",
            TreasureCategory::Bronze => "Bronze",
            TreasureCategory::Gem => "Gem",
            TreasureCategory::Chest => "Chest",
            TreasureCategory::None => "None",
        }
    }
}

/// Treasure that credits points to whoever collects it
#[derive(Component, Debug, Clone, PartialEq)]
#[require(
    Pickup = Pickup::respawning(TREASURE_RESPAWN_SECS).with_priority(TREASURE_PRIORITY),
    CollisionSphere = CollisionSphere::new(TREASURE_SPHERE_RADIUS)
)]
pub struct TreasurePickup {
    category: TreasureCategory,
    point_value: i32,
    /// Derive the display tint from the category
    pub auto_appearance: bool,
}

impl TreasurePickup {
    pub fn new(category: TreasureCategory) -> Self {
        Self {
            category,
            point_value: category.point_value(),
            auto_appearance: true,
        }
    }

    /// Override the point value the category would give
    pub fn with_point_value(mut self, point_value: i32) -> Self {
        self.point_value = point_value;
        self
    }

    /// Change the category. The point value is recomputed from the table, dropping any
    /// override.
    pub fn set_category(&mut self, category: TreasureCategory) {
        self.category = category;
        self.point_value = category.point_value();
    }

    pub fn category(&self) -> TreasureCategory {
        self.category
    }

    pub fn point_value(&self) -> i32 {
        self.point_value
    }
}

impl Default for TreasurePickup {
    fn default() -> Self {
        Self::new(TreasureCategory::Gold)
    }
}

impl Collectible for TreasurePickup {
    fn on_collected(&self, progress: &mut PlayerProgress, score_multiplier: f32) {
        progress.add_points(self.point_value, score_multiplier);
    }
}
