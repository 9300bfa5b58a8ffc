//! Rendering module - the bounded follow camera.

mod camera;
mod plugin;

pub use camera::{clamp_to_bounds, FollowCamera};
pub use plugin::RenderingPlugin;
