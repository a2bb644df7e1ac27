//! Game engine: board state plus the bookkeeping each move keeps in sync.

use super::rules;
use super::slot::{AvailableSlots, Slot};
use super::types::{Board, Mark};
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The slot already holds a mark.
    #[display("Slot {} is already taken", _0)]
    SlotTaken(#[error(not(source))] Slot),
}

/// Tic-tac-toe engine for a single session.
///
/// Owns the board and the set of open slots. Every successful move
/// marks exactly one cell and removes exactly one open slot, so
/// `available().len() + moves_played() == 9` always holds.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    available: AvailableSlots,
    moves_played: usize,
    last_mover: Option<Mark>,
}

impl GameEngine {
    /// Creates an engine with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            available: AvailableSlots::full(),
            moves_played: 0,
            last_mover: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the open slots.
    pub fn available(&self) -> &AvailableSlots {
        &self.available
    }

    /// Number of successful moves so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Mark of the most recent successful move.
    pub fn last_mover(&self) -> Option<Mark> {
        self.last_mover
    }

    /// Marks `slot` for `mark`.
    ///
    /// Fails with [`MoveError::SlotTaken`] without touching any state if
    /// the slot is occupied.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, slot: Slot, mark: Mark) -> Result<(), MoveError> {
        if !self.board.place(slot, mark) {
            warn!(%slot, %mark, "Rejected move onto occupied slot");
            return Err(MoveError::SlotTaken(slot));
        }
        self.available.remove(slot);
        self.moves_played += 1;
        self.last_mover = Some(mark);
        debug_assert_eq!(self.board.marked_count(), self.moves_played);
        debug_assert_eq!(self.available.len() + self.moves_played, 9);
        debug!(%slot, %mark, moves = self.moves_played, "Move applied");
        Ok(())
    }

    /// Returns true if the slot holds a mark.
    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.board.is_occupied(slot)
    }

    /// Returns true if `mark` holds a complete line.
    pub fn has_won(&self, mark: Mark) -> bool {
        rules::has_won(&self.board, mark)
    }

    /// Returns true if the board is exhausted and the last mover did not win.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(&self.available, &self.board, self.last_mover)
    }

    /// Picks a uniformly random open slot.
    ///
    /// Returns `None` when no slot is open; nothing is marked either way.
    #[instrument(skip(self, rng), fields(open = self.available.len()))]
    pub fn select_computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Slot> {
        let choice = self.available.sample(rng);
        debug!(?choice, "Computer move selected");
        choice
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
