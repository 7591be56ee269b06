//! Decorative confetti effects.
//!
//! The capability is acquired lazily: assets are loaded on a spawned task
//! the first time a celebration fires, and the signal to the container is
//! always routed through the event queue so it lands one loop turn after
//! the trigger. Load failures are logged and swallowed; the counter never
//! sees them.

pub mod container;
pub mod manager;
pub mod palette;
pub mod particle;

pub use container::ConfettiContainer;
pub use manager::EffectsManager;
pub use palette::{ConfettiAssets, EffectsError};
