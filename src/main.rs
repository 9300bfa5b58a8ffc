//! Platformer Demo - Entry Point
//!
//! A single-scene arcade platformer: five static platforms, gravity,
//! and a camera that follows the player.
//!
//! Controls:
//! - Left/Right arrows: Move
//! - Up arrow: Jump (only while standing on a surface)

use bevy::app::AppExit;

use platformer_demo::host::GameHost;

fn main() -> AppExit {
    let mut host = GameHost::new(platformer_demo::build_app);

    if let Err(err) = host.mount() {
        eprintln!("failed to mount engine instance: {err}");
        return AppExit::error();
    }

    match host.run() {
        Ok(exit) => exit,
        Err(err) => {
            eprintln!("failed to run engine instance: {err}");
            AppExit::error()
        }
    }
}
