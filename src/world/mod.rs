//! World module - level data, generated textures, and geometry.

mod assets;
mod builder;
mod data;
mod error;
mod plugin;

pub use assets::SceneTextures;
pub use builder::{LevelGeometry, Platform};
pub use data::{LevelDefinition, PlatformDef};
pub use error::DataLoadError;
pub use plugin::{setup_level, WorldPlugin};
