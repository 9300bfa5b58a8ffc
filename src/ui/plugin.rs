//! UI plugin - the static informational overlay.

use bevy::prelude::*;

use super::overlay;

/// UI plugin - handles the informational shell.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        overlay::setup_overlay_systems(app);
    }
}
