//! Camera that tracks the player within the world rectangle.

use bevy::prelude::*;

use crate::core::ScenePhase;
use crate::player::Player;
use crate::world::LevelDefinition;
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Camera that follows a target, clamped to a world rectangle.
#[derive(Component)]
pub struct FollowCamera {
    pub bounds: Rect,
}

/// Set up camera systems.
pub fn setup_camera_systems(app: &mut App) {
    app.add_systems(OnEnter(ScenePhase::Loaded), spawn_camera)
        .add_systems(Update, camera_follow.run_if(in_state(ScenePhase::Running)));
}

/// Spawn the 2D camera with the level's follow bounds.
fn spawn_camera(mut commands: Commands, level: Res<LevelDefinition>) {
    commands.spawn((
        Camera2d,
        FollowCamera {
            bounds: level.bounds(),
        },
    ));
}

/// Keep the camera on the player without showing anything outside the
/// world rectangle.
fn camera_follow(
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &FollowCamera), Without<Player>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let Ok((mut camera_transform, camera)) = camera_query.get_single_mut() else {
        return;
    };

    let half_view = Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
    let target = clamp_to_bounds(
        player_transform.translation.truncate(),
        camera.bounds,
        half_view,
    );
    camera_transform.translation.x = target.x;
    camera_transform.translation.y = target.y;
}

/// Clamp a follow target so a view of `half_view` around it stays inside
/// `bounds`. A bounds rectangle smaller than the view centers that axis.
pub fn clamp_to_bounds(target: Vec2, bounds: Rect, half_view: Vec2) -> Vec2 {
    let min = bounds.min + half_view;
    let max = bounds.max - half_view;
    let center = bounds.center();

    let clamp_axis = |value: f32, lo: f32, hi: f32, centered: f32| {
        if lo <= hi {
            value.clamp(lo, hi)
        } else {
            centered
        }
    };

    Vec2::new(
        clamp_axis(target.x, min.x, max.x, center.x),
        clamp_axis(target.y, min.y, max.y, center.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_VIEW: Vec2 = Vec2::new(400.0, 300.0);

    fn wide_bounds() -> Rect {
        Rect::from_center_size(Vec2::ZERO, Vec2::new(1600.0, 1200.0))
    }

    #[test]
    fn target_inside_the_reachable_band_is_unchanged() {
        let target = Vec2::new(100.0, 50.0);
        assert_eq!(clamp_to_bounds(target, wide_bounds(), HALF_VIEW), target);
    }

    #[test]
    fn target_outside_the_band_is_clamped() {
        let target = Vec2::new(900.0, -700.0);
        assert_eq!(
            clamp_to_bounds(target, wide_bounds(), HALF_VIEW),
            Vec2::new(400.0, -300.0)
        );
    }

    #[test]
    fn bounds_matching_the_view_pin_the_camera_to_the_center() {
        let bounds = Rect::from_center_size(Vec2::ZERO, Vec2::new(800.0, 600.0));
        let target = Vec2::new(-250.0, 120.0);
        assert_eq!(clamp_to_bounds(target, bounds, HALF_VIEW), Vec2::ZERO);
    }

    #[test]
    fn bounds_smaller_than_the_view_center_that_axis() {
        let bounds = Rect::from_center_size(Vec2::new(50.0, 0.0), Vec2::new(200.0, 1200.0));
        let result = clamp_to_bounds(Vec2::new(500.0, 500.0), bounds, HALF_VIEW);
        assert_eq!(result.x, 50.0);
        assert_eq!(result.y, 300.0);
    }
}
