//! Platformer Demo - a minimal 2D arcade platformer in Bevy.
//!
//! One scene: five static platforms, an arrow-key-driven player with
//! arcade physics (gravity, velocity, restitution), and a camera that
//! follows the player within the world bounds.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: scene phase state machine (Unloaded -> Loaded -> Running)
//! - **World**: level data, generated textures, platform geometry
//! - **Player**: spawning, arrow-key control, grounded check
//! - **Rendering**: bounded camera follow
//! - **UI**: static title/instructions overlay
//!
//! The engine instance itself is owned by [`host::GameHost`], which
//! mounts and unmounts the whole `App` as a scoped resource.

pub mod core;
pub mod host;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Logical canvas width in pixels.
pub const WINDOW_WIDTH: f32 = 800.0;
/// Logical canvas height in pixels.
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Downward gravity in pixels per second squared.
pub const GRAVITY: f32 = 300.0;

/// Sky-blue background (#87CEEB).
pub const BACKGROUND_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);

/// Main game plugin that adds all sub-plugins.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}

/// Build the complete game app: window, physics, background, and the
/// game plugins.
///
/// Constructing the `App` does not start it; the [`host::GameHost`]
/// decides when to run and when to tear it down.
pub fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer Demo".to_string(),
            resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
    .insert_resource(ClearColor(BACKGROUND_COLOR))
    .add_plugins(PlatformerPlugin);
    app
}
