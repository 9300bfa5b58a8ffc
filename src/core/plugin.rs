//! Core plugin that sets up the scene phase state machine.

use bevy::prelude::*;

use super::states::ScenePhase;

/// Core plugin - must be added first as other plugins gate on the phase.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ScenePhase>();
    }
}
