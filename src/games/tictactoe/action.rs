//! Player intent read from an input source.

use super::Slot;

/// What a human chose at a move prompt.
///
/// Quitting is its own variant rather than a reserved slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveInput {
    /// Place a mark in this (unoccupied) slot.
    Move(Slot),
    /// Abandon the current session.
    Quit,
}
