use bevy::prelude::*;
use bevy_hanabi::prelude::EffectAsset;

/// Shared sparkle effect for every pickup
#[derive(Resource, Clone)]
pub struct PickupSparkleEffect(pub Handle<EffectAsset>);
