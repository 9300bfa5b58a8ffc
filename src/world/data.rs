//! Level data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::DataLoadError;

/// Path of the level file loaded at scene start.
pub const LEVEL_PATH: &str = "assets/levels/default.ron";

/// A single static platform: center position and full extent, in world
/// units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformDef {
    pub position: (f32, f32),
    pub size: (f32, f32),
}

/// Complete level layout: world rectangle, platform set, player start.
///
/// The world rectangle is centered on the origin, Y up. The built-in
/// default is used whenever the RON file is missing or malformed.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDefinition {
    /// Full width/height of the world rectangle.
    pub world_size: (f32, f32),
    /// Player spawn position.
    pub player_start: (f32, f32),
    /// Static platform set. Immutable once spawned.
    pub platforms: Vec<PlatformDef>,
}

impl Default for LevelDefinition {
    fn default() -> Self {
        Self {
            world_size: (800.0, 600.0),
            player_start: (-300.0, -150.0),
            platforms: vec![
                // Ground
                PlatformDef {
                    position: (0.0, -280.0),
                    size: (800.0, 40.0),
                },
                // Floating ledges
                PlatformDef {
                    position: (200.0, -100.0),
                    size: (200.0, 20.0),
                },
                PlatformDef {
                    position: (-350.0, 50.0),
                    size: (200.0, 20.0),
                },
                PlatformDef {
                    position: (350.0, 80.0),
                    size: (200.0, 20.0),
                },
                PlatformDef {
                    position: (0.0, -50.0),
                    size: (200.0, 20.0),
                },
            ],
        }
    }
}

impl LevelDefinition {
    /// Load a level definition from a RON file.
    pub fn load(path: &str) -> Result<Self, DataLoadError> {
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// The world rectangle, centered on the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(Vec2::ZERO, Vec2::new(self.world_size.0, self.world_size.1))
    }
}

/// System to load the level definition during the Unloaded phase.
pub fn load_level(mut commands: Commands) {
    let level = match LevelDefinition::load(LEVEL_PATH) {
        Ok(level) => {
            info!("Loaded level from {}", LEVEL_PATH);
            level
        }
        Err(e) => {
            warn!("Could not load {}: {}. Using built-in layout.", LEVEL_PATH, e);
            LevelDefinition::default()
        }
    };
    commands.insert_resource(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_ground_and_four_ledges() {
        let level = LevelDefinition::default();
        assert_eq!(level.platforms.len(), 5);
        assert_eq!(level.platforms[0].size, (800.0, 40.0));
        for ledge in &level.platforms[1..] {
            assert_eq!(ledge.size, (200.0, 20.0));
        }
    }

    #[test]
    fn bounds_are_centered_on_the_origin() {
        let bounds = LevelDefinition::default().bounds();
        assert_eq!(bounds.min, Vec2::new(-400.0, -300.0));
        assert_eq!(bounds.max, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn shipped_level_file_matches_the_builtin_default() {
        let text = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets/levels/default.ron"
        ));
        let parsed: LevelDefinition = ron::from_str(text).unwrap();
        assert_eq!(parsed, LevelDefinition::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = LevelDefinition::load("assets/levels/does-not-exist.ron");
        assert!(matches!(result, Err(DataLoadError::ReadError { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        // The manifest itself is valid TOML but not a RON level.
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let result = LevelDefinition::load(path);
        assert!(matches!(result, Err(DataLoadError::ParseError { .. })));
    }
}
