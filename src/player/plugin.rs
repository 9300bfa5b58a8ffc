//! Player plugin - control and movement systems.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles player control and the grounded check.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}
