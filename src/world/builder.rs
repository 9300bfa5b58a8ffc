//! World construction: the platform set and the boundary walls.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::assets::SceneTextures;
use super::data::{LevelDefinition, PlatformDef};

/// Thickness of the invisible walls framing the world rectangle.
const BOUNDARY_THICKNESS: f32 = 20.0;

/// Marker for all level geometry.
#[derive(Component)]
pub struct LevelGeometry;

/// Marker for platform entities.
#[derive(Component)]
pub struct Platform;

/// Build the level: platform set plus world-boundary colliders.
pub fn build_level(commands: &mut Commands, textures: &SceneTextures, level: &LevelDefinition) {
    for platform in &level.platforms {
        spawn_platform(commands, textures, platform);
    }
    spawn_boundary_walls(commands, level.bounds());
}

/// Spawn one static platform with its collider.
fn spawn_platform(commands: &mut Commands, textures: &SceneTextures, def: &PlatformDef) {
    let size = Vec2::new(def.size.0, def.size.1);
    commands.spawn((
        Platform,
        LevelGeometry,
        Sprite {
            image: textures.platform.clone(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(def.position.0, def.position.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
    ));
}

/// Frame the world rectangle with four static colliders so the player
/// collides with the world bounds instead of leaving them.
fn spawn_boundary_walls(commands: &mut Commands, bounds: Rect) {
    let center = bounds.center();
    let half = BOUNDARY_THICKNESS / 2.0;
    let half_width = bounds.width() / 2.0;
    let half_height = bounds.height() / 2.0;

    let walls = [
        // left, right, bottom, top
        (Vec2::new(bounds.min.x - half, center.y), Vec2::new(half, half_height)),
        (Vec2::new(bounds.max.x + half, center.y), Vec2::new(half, half_height)),
        (Vec2::new(center.x, bounds.min.y - half), Vec2::new(half_width, half)),
        (Vec2::new(center.x, bounds.max.y + half), Vec2::new(half_width, half)),
    ];

    for (position, half_extents) in walls {
        commands.spawn((
            LevelGeometry,
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
        ));
    }
}
