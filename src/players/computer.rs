//! Random-move computer opponent.

use super::Pause;
use crate::games::tictactoe::{GameEngine, Slot};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default time the computer spends "thinking" before it moves.
pub const DEFAULT_THINK_TIME: Duration = Duration::from_millis(500);

/// Computer opponent that plays a uniformly random open slot.
///
/// Owns one random generator for the whole process, so seeding it
/// makes every session it plays reproducible.
#[derive(Debug, derive_new::new)]
pub struct ComputerPlayer<R, P> {
    rng: R,
    pause: P,
    think_time: Duration,
}

impl<R: Rng, P: Pause> ComputerPlayer<R, P> {
    /// Chooses the computer's next move.
    ///
    /// Returns `None` immediately, without pausing, if the board is full.
    #[instrument(skip(self, engine), fields(open = engine.available().len()))]
    pub fn choose_move(&mut self, engine: &GameEngine) -> Option<Slot> {
        if engine.available().is_empty() {
            debug!("No open slots for computer");
            return None;
        }
        debug!(think_ms = self.think_time().as_millis() as u64, "Computer thinking");
        self.pause.pause(self.think_time);
        engine.select_computer_move(&mut self.rng)
    }

    /// Configured think time.
    pub fn think_time(&self) -> Duration {
        self.think_time
    }
}
