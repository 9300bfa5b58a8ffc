//! UI module - the static informational overlay.

mod overlay;
mod plugin;

pub use overlay::OverlayRoot;
pub use plugin::UiPlugin;
