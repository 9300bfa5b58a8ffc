//! Rendering plugin - camera spawning and follow.

use bevy::prelude::*;

use super::camera;

/// Rendering plugin - handles the bounded follow camera.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        camera::setup_camera_systems(app);
    }
}
