//! Static overlay - title and control instructions.

use bevy::prelude::*;

use crate::core::ScenePhase;

/// Marker for overlay root entities.
#[derive(Component)]
pub struct OverlayRoot;

/// Set up overlay systems.
pub fn setup_overlay_systems(app: &mut App) {
    app.add_systems(OnEnter(ScenePhase::Loaded), spawn_overlay);
}

/// Spawn the informational shell around the playfield.
///
/// The overlay has no dynamic state; it is created once and lives for
/// the lifetime of the engine instance.
fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            OverlayRoot,
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("Platformer Demo"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(4.0)),
                    ..default()
                },
            ));

            // Instructions
            parent.spawn((
                Text::new("Use arrow keys to move and jump!"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                Node {
                    margin: UiRect::bottom(Val::Px(2.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Left/Right: move    Up: jump"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}
