pub mod components;

// Re-export public API
pub use components::*;
