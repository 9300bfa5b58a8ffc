//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Tracks player movement state for physics.
///
/// The grounded flag is refreshed every frame from a ray cast against
/// the physics context; it is the only gate on the jump impulse.
#[derive(Component)]
pub struct MovementState {
    pub is_grounded: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        // The player spawns in the air and falls onto the ground.
        Self { is_grounded: false }
    }
}

/// Tuning for the player body and control policy.
#[derive(Resource)]
pub struct PlayerConfig {
    /// Horizontal run speed in units per second
    pub run_speed: f32,
    /// Upward velocity applied on jump
    pub jump_speed: f32,
    /// Restitution of the player body
    pub bounce: f32,
    /// Side length of the square player sprite
    pub size: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            run_speed: 160.0,
            jump_speed: 330.0,
            bounce: 0.2,
            size: 32.0,
        }
    }
}
