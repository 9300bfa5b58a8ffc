//! Arrow-key player movement and the grounded check.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::control::{self, DirectionalInput};
use crate::core::ScenePhase;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<PlayerConfig>().add_systems(
        Update,
        player_movement.run_if(in_state(ScenePhase::Running)),
    );
}

/// Apply the control policy to the player every frame.
///
/// The ground check casts a short downward ray from the bottom edge of
/// the player's collider, excluding the player itself. The collision
/// response against platforms is resolved by the physics plugin; this
/// system only writes velocity and tint.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<
        (Entity, &Transform, &mut Velocity, &mut Sprite, &mut MovementState),
        With<Player>,
    >,
) {
    let Ok((player_entity, transform, mut velocity, mut sprite, mut movement_state)) =
        player_query.get_single_mut()
    else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    // Cast from just inside the bottom edge of the collider.
    let half_size = config.size / 2.0;
    let ray_origin = transform.translation.truncate() - Vec2::Y * (half_size - 1.0);
    let is_grounded = context
        .cast_ray(
            ray_origin,
            Vec2::NEG_Y,
            2.0,
            true,
            QueryFilter::default().exclude_collider(player_entity),
        )
        .is_some();
    movement_state.is_grounded = is_grounded;

    let input = DirectionalInput::from_keyboard(&keyboard);

    let steering = control::steer(input, config.run_speed);
    velocity.linvel.x = steering.velocity_x;
    sprite.color = steering.tint;

    if let Some(upward) = control::jump_velocity(input, is_grounded, config.jump_speed) {
        velocity.linvel.y = upward;
    }
}

/// Spawn the player entity with its physics body.
pub fn spawn_player(
    commands: &mut Commands,
    texture: Handle<Image>,
    position: Vec2,
    config: &PlayerConfig,
) -> Entity {
    commands
        .spawn((
            Player,
            MovementState::default(),
            Sprite {
                image: texture,
                color: control::TINT_IDLE,
                custom_size: Some(Vec2::splat(config.size)),
                ..default()
            },
            // Draw the player above the platforms.
            Transform::from_translation(position.extend(1.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(config.size / 2.0, config.size / 2.0),
            Velocity::zero(),
            Restitution::coefficient(config.bounce),
            LockedAxes::ROTATION_LOCKED,
        ))
        .id()
}
