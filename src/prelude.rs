pub use bevy::prelude::*;
pub use crate::config::GameConfig;
pub use crate::game::sets::GameSet;
pub use crate::states::*;

// Re-export components
pub use crate::game::components::*;
pub use crate::key::components::*;
pub use crate::overlap::components::*;
pub use crate::pickup::components::*;
pub use crate::progress::components::*;
pub use crate::replication::components::*;
pub use crate::treasure::components::*;

// Re-export messages
pub use crate::key::events::*;
pub use crate::overlap::events::*;
pub use crate::pickup::events::*;
pub use crate::replication::events::*;

pub use crate::game::resources::*;
