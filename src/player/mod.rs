//! Player module - player entity, arrow-key control, and movement.

mod components;
mod control;
mod movement;
mod plugin;

pub use components::*;
pub use control::{jump_velocity, steer, DirectionalInput, Steering, TINT_IDLE, TINT_LEFT, TINT_RIGHT};
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
