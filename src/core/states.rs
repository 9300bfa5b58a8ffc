//! Scene phase definitions that control the demo's lifecycle.
//!
//! Phases determine which systems run at any given time. Texture and
//! level-data registration happens in Unloaded, world setup in Loaded,
//! and the per-frame control systems only run in Running.

use bevy::prelude::*;

/// Scene lifecycle phase.
///
/// The scene moves forward through these phases exactly once:
/// - Start in `Unloaded` to register textures and level data
/// - Move to `Loaded` once registration completes
/// - Enter `Running` once the world is built; `Running` is terminal
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ScenePhase {
    /// Initial phase - no textures or level data registered yet
    #[default]
    Unloaded,
    /// Assets and level data registered, world not yet built
    Loaded,
    /// World built, gameplay systems active
    Running,
}

impl ScenePhase {
    /// The phase that follows this one. `Running` absorbs.
    pub fn next(self) -> ScenePhase {
        match self {
            ScenePhase::Unloaded => ScenePhase::Loaded,
            ScenePhase::Loaded => ScenePhase::Running,
            ScenePhase::Running => ScenePhase::Running,
        }
    }
}

/// Request the transition to the following phase.
///
/// Chained after the systems that complete the current phase's work.
pub fn advance_phase(phase: Res<State<ScenePhase>>, mut next: ResMut<NextState<ScenePhase>>) {
    next.set(phase.get().next());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order() {
        assert_eq!(ScenePhase::Unloaded.next(), ScenePhase::Loaded);
        assert_eq!(ScenePhase::Loaded.next(), ScenePhase::Running);
    }

    #[test]
    fn running_is_terminal() {
        assert_eq!(ScenePhase::Running.next(), ScenePhase::Running);
    }
}
