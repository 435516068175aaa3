pub mod plugin;
pub mod systems;

pub use plugin::*;
pub use systems::*;
