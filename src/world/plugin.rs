//! World plugin - level loading, geometry, and physics setup.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::{advance_phase, ScenePhase};
use crate::player::{spawn_player, PlayerConfig};
use crate::GRAVITY;

use super::assets::{register_textures, SceneTextures};
use super::builder::build_level;
use super::data::{load_level, LevelDefinition};

/// World plugin - drives the Unloaded and Loaded phases.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_gravity)
            .add_systems(
                OnEnter(ScenePhase::Unloaded),
                (register_textures, load_level, advance_phase).chain(),
            )
            .add_systems(
                OnEnter(ScenePhase::Loaded),
                (setup_level, advance_phase).chain(),
            );
    }
}

/// Point rapier's gravity straight down at the demo's strength.
fn configure_gravity(mut rapier_config: Query<&mut RapierConfiguration>) {
    let Ok(mut config) = rapier_config.get_single_mut() else {
        return;
    };
    config.gravity = Vec2::new(0.0, -GRAVITY);
}

/// Build the world and spawn the player once assets and data are in.
pub fn setup_level(
    mut commands: Commands,
    textures: Res<SceneTextures>,
    level: Res<LevelDefinition>,
    player_config: Res<PlayerConfig>,
) {
    info!(
        "Building level: {} platforms, player start {:?}",
        level.platforms.len(),
        level.player_start
    );

    build_level(&mut commands, &textures, &level);
    spawn_player(
        &mut commands,
        textures.player.clone(),
        Vec2::new(level.player_start.0, level.player_start.1),
        &player_config,
    );
}
