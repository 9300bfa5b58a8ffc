//! Arrow-key control policy.
//!
//! Pure functions over sampled key state, so the movement rules are
//! testable without an engine in the loop.

use bevy::prelude::*;

/// Tint while moving left.
pub const TINT_LEFT: Color = Color::srgb(1.0, 0.0, 0.0);
/// Tint while moving right.
pub const TINT_RIGHT: Color = Color::srgb(0.0, 0.0, 1.0);
/// Tint while idle.
pub const TINT_IDLE: Color = Color::srgb(0.0, 1.0, 0.0);

/// Sampled state of the four arrow keys for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    /// Sample the arrow keys from the keyboard resource.
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            up: keyboard.pressed(KeyCode::ArrowUp),
            down: keyboard.pressed(KeyCode::ArrowDown),
            left: keyboard.pressed(KeyCode::ArrowLeft),
            right: keyboard.pressed(KeyCode::ArrowRight),
        }
    }
}

/// Horizontal velocity and tint derived from directional input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub velocity_x: f32,
    pub tint: Color,
}

/// Horizontal control policy. Left wins over right; no key means stop.
pub fn steer(input: DirectionalInput, run_speed: f32) -> Steering {
    if input.left {
        Steering {
            velocity_x: -run_speed,
            tint: TINT_LEFT,
        }
    } else if input.right {
        Steering {
            velocity_x: run_speed,
            tint: TINT_RIGHT,
        }
    } else {
        Steering {
            velocity_x: 0.0,
            tint: TINT_IDLE,
        }
    }
}

/// Upward velocity to apply this frame, if any.
///
/// Jumping requires standing on a surface. While airborne the grounded
/// flag is false, so holding up cannot re-trigger the impulse.
pub fn jump_velocity(input: DirectionalInput, is_grounded: bool, jump_speed: f32) -> Option<f32> {
    (input.up && is_grounded).then_some(jump_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN: f32 = 160.0;
    const JUMP: f32 = 330.0;

    fn keys(up: bool, left: bool, right: bool) -> DirectionalInput {
        DirectionalInput {
            up,
            down: false,
            left,
            right,
        }
    }

    #[test]
    fn left_runs_left_and_tints_red() {
        let steering = steer(keys(false, true, false), RUN);
        assert_eq!(
            steering,
            Steering {
                velocity_x: -160.0,
                tint: TINT_LEFT
            }
        );
    }

    #[test]
    fn right_runs_right_and_tints_blue() {
        let steering = steer(keys(false, false, true), RUN);
        assert_eq!(
            steering,
            Steering {
                velocity_x: 160.0,
                tint: TINT_RIGHT
            }
        );
    }

    #[test]
    fn no_direction_stops_and_tints_green() {
        let steering = steer(keys(false, false, false), RUN);
        assert_eq!(
            steering,
            Steering {
                velocity_x: 0.0,
                tint: TINT_IDLE
            }
        );
    }

    #[test]
    fn left_takes_priority_over_right() {
        let steering = steer(keys(false, true, true), RUN);
        assert_eq!(steering.velocity_x, -160.0);
        assert_eq!(steering.tint, TINT_LEFT);
    }

    #[test]
    fn jump_fires_only_when_grounded_and_up_is_held() {
        assert_eq!(jump_velocity(keys(true, false, false), true, JUMP), Some(330.0));
        assert_eq!(jump_velocity(keys(true, false, false), false, JUMP), None);
        assert_eq!(jump_velocity(keys(false, false, false), true, JUMP), None);
    }

    #[test]
    fn holding_up_while_airborne_does_nothing_until_landing() {
        // Grounded and pressing up: the impulse fires.
        assert_eq!(jump_velocity(keys(true, false, false), true, JUMP), Some(330.0));
        // Airborne on the following frames, still holding up: no impulse.
        assert_eq!(jump_velocity(keys(true, false, false), false, JUMP), None);
        assert_eq!(jump_velocity(keys(true, false, false), false, JUMP), None);
        // Back on the ground: the impulse can fire again.
        assert_eq!(jump_velocity(keys(true, false, false), true, JUMP), Some(330.0));
    }

    #[test]
    fn down_key_has_no_effect_on_steering() {
        let mut input = keys(false, false, false);
        input.down = true;
        assert_eq!(steer(input, RUN).velocity_x, 0.0);
    }
}
