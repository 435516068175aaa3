use bevy::prelude::*;
use std::collections::HashSet;

/// (target, collector) pairs that overlapped on the previous detection pass
#[derive(Resource, Default, Debug)]
pub struct OverlapPairs(pub HashSet<(Entity, Entity)>);
