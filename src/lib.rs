pub mod audio;
pub mod config;
pub mod effects;
pub mod game;
pub mod hud;
pub mod key;
pub mod overlap;
pub mod pickup;
pub mod prelude;
pub mod progress;
pub mod replication;
pub mod states;
pub mod treasure;

pub use audio::plugin as audio_plugin;
pub use effects::plugin as effects_plugin;
pub use game::plugin as game_plugin;
pub use hud::plugin as hud_plugin;
