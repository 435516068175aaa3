use bevy::prelude::*;

/// Child entity carrying a pickup's sparkle particles
#[derive(Component, Debug, Default)]
pub struct PickupSparkles;
