use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::plugin::*;
use crate::pickup::events::PlaySoundAt;

/// Plays queued pickup sounds, dropping the ones that land inside the cooldown.
/// Without an asset server or the channel the requests are discarded.
///
/// The channel is not spatial: sounds play unpositioned and `location` only appears in the
/// log.
pub fn play_pickup_sounds(
    mut requests: MessageReader<PlaySoundAt>,
    asset_server: Option<Res<AssetServer>>,
    channel: Option<Res<AudioChannel<PickupSoundChannel>>>,
    mut cooldown: ResMut<PickupSoundCooldown>,
) {
    let (Some(asset_server), Some(channel)) = (asset_server, channel) else {
        requests.clear();
        return;
    };

    for request in requests.read() {
        if !cooldown.is_ready() {
            debug!("Skipping {} at {}, sound cooldown active", request.sound, request.location);
            continue;
        }

        debug!("Playing {} for a pickup at {}", request.sound, request.location);
        channel.play(asset_server.load(request.sound.clone()));
        cooldown.reset_random();
    }
}
