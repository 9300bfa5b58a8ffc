//! Engine host - scoped ownership of the Bevy `App` instance.
//!
//! Mounting constructs the engine, unmounting destroys it. At most one
//! engine instance is live per host, and `Drop` releases it on every
//! exit path so a remount always starts clean.

use bevy::app::{App, AppExit};
use thiserror::Error;

/// Errors from host lifecycle misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// `mount` was called while an engine instance is already live.
    #[error("an engine instance is already mounted")]
    AlreadyMounted,

    /// `run` was called with no engine instance mounted.
    #[error("no engine instance is mounted")]
    NotMounted,
}

/// Owns at most one engine instance, created by its builder function.
pub struct GameHost {
    app: Option<App>,
    builder: fn() -> App,
}

impl GameHost {
    /// Create an unmounted host. `builder` is invoked on every mount.
    pub fn new(builder: fn() -> App) -> Self {
        Self { app: None, builder }
    }

    /// Whether an engine instance is currently live.
    pub fn is_mounted(&self) -> bool {
        self.app.is_some()
    }

    /// Construct and retain the engine instance.
    pub fn mount(&mut self) -> Result<(), HostError> {
        if self.app.is_some() {
            return Err(HostError::AlreadyMounted);
        }
        self.app = Some((self.builder)());
        Ok(())
    }

    /// Destroy the retained engine instance, if any.
    ///
    /// Dropping the `App` releases its window, event listeners, and
    /// render loop. Safe to call when nothing is mounted.
    pub fn unmount(&mut self) {
        self.app = None;
    }

    /// Hand the mounted engine instance to its runner and block until it
    /// exits. The handle is cleared once the runner returns.
    pub fn run(&mut self) -> Result<AppExit, HostError> {
        let mut app = self.app.take().ok_or(HostError::NotMounted)?;
        Ok(app.run())
    }
}

impl Drop for GameHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_app() -> App {
        App::new()
    }

    #[test]
    fn mount_retains_a_single_instance() {
        let mut host = GameHost::new(bare_app);
        assert!(!host.is_mounted());
        assert_eq!(host.mount(), Ok(()));
        assert!(host.is_mounted());
    }

    #[test]
    fn second_mount_is_rejected_while_live() {
        let mut host = GameHost::new(bare_app);
        host.mount().unwrap();
        assert_eq!(host.mount(), Err(HostError::AlreadyMounted));
        assert!(host.is_mounted());
    }

    #[test]
    fn unmount_clears_the_handle_and_permits_remount() {
        let mut host = GameHost::new(bare_app);
        host.mount().unwrap();
        host.unmount();
        assert!(!host.is_mounted());
        assert_eq!(host.mount(), Ok(()));
        assert!(host.is_mounted());
    }

    #[test]
    fn unmount_without_instance_is_a_no_op() {
        let mut host = GameHost::new(bare_app);
        host.unmount();
        assert!(!host.is_mounted());
    }

    #[test]
    fn run_without_mount_is_rejected() {
        let mut host = GameHost::new(bare_app);
        assert_eq!(host.run().unwrap_err(), HostError::NotMounted);
    }

    #[test]
    fn run_consumes_the_mounted_instance() {
        let mut host = GameHost::new(bare_app);
        host.mount().unwrap();
        // A bare app's default runner executes one update and returns.
        assert!(host.run().is_ok());
        assert!(!host.is_mounted());
    }
}
