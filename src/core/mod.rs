//! Core module - the scene phase state machine.
//!
//! This module provides the lifecycle foundation the other systems
//! gate on.

mod plugin;
mod states;

pub use plugin::CorePlugin;
pub use states::*;
