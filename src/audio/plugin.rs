use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::systems::*;
use crate::game::sets::GameSet;

/// Channel for pickup and door sounds
#[derive(Resource)]
pub struct PickupSoundChannel;

/// Debounces pickup sounds.
/// Only one sound plays within a random 100-250ms window so a ring of pickups doesn't stack up.
#[derive(Resource)]
pub struct PickupSoundCooldown {
    pub timer: Timer,
}

impl Default for PickupSoundCooldown {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(0.1, TimerMode::Once);
        // Start finished so the first sound plays immediately
        timer.tick(std::time::Duration::from_secs_f32(0.1));
        Self { timer }
    }
}

impl PickupSoundCooldown {
    pub fn is_ready(&self) -> bool {
        self.timer.is_finished()
    }

    /// Reset the cooldown with a random duration between 100-250ms
    pub fn reset_random(&mut self) {
        use rand::Rng;
        let duration = rand::thread_rng().gen_range(0.1..=0.25);
        self.timer
            .set_duration(std::time::Duration::from_secs_f32(duration));
        self.timer.reset();
    }
}

pub fn tick_pickup_sound_cooldown(mut cooldown: ResMut<PickupSoundCooldown>, time: Res<Time>) {
    cooldown.timer.tick(time.delta());
}

/// Needs `bevy_kira_audio::AudioPlugin` in the app
pub fn plugin(app: &mut App) {
    app.add_audio_channel::<PickupSoundChannel>()
        .init_resource::<PickupSoundCooldown>()
        .add_systems(
            Update,
            (
                tick_pickup_sound_cooldown.in_set(GameSet::Lifecycle),
                play_pickup_sounds.in_set(GameSet::Presentation),
            ),
        );
}
