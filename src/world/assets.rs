//! Generated textures for the scene.
//!
//! The demo has no image files on disk; both sprites use a 1x1 solid
//! white pixel generated in memory, stretched and tinted per entity.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Handles to the generated scene textures.
#[derive(Resource)]
pub struct SceneTextures {
    pub player: Handle<Image>,
    pub platform: Handle<Image>,
}

/// System to register the generated textures during the Unloaded phase.
///
/// Re-running replaces the resource with fresh handles; the asset store
/// drops the orphaned images.
pub fn register_textures(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let player = images.add(solid_pixel());
    let platform = images.add(solid_pixel());
    commands.insert_resource(SceneTextures { player, platform });
}

/// A 1x1 opaque white image.
fn solid_pixel() -> Image {
    Image::new_fill(
        Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0xff, 0xff, 0xff, 0xff],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_pixel_is_one_opaque_white_texel() {
        let image = solid_pixel();
        assert_eq!(image.texture_descriptor.size.width, 1);
        assert_eq!(image.texture_descriptor.size.height, 1);
        assert_eq!(image.data, vec![0xff; 4]);
    }
}
