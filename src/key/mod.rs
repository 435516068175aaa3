pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

// Re-export public API
pub use components::*;
pub use events::*;
pub use plugin::plugin;
pub use systems::*;
