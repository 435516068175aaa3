use bevy::prelude::*;

/// Text line showing the local session's progress
#[derive(Component, Debug, Default)]
pub struct ProgressDisplay;

#[derive(Component, Debug, Default)]
pub struct PauseBanner;
