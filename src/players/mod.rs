//! Non-human players and the pacing they use.

mod computer;

pub use computer::{ComputerPlayer, DEFAULT_THINK_TIME};

use std::time::Duration;

/// Cosmetic delay before a computer move resolves.
pub trait Pause {
    /// Waits for roughly `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}
