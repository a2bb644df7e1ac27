//! Core domain types for tic-tac-toe.

use super::slot::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Mark placed on the board by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet played.
    Empty,
    /// Holds a mark; never overwritten.
    Marked(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given slot.
    pub fn get(&self, slot: Slot) -> Cell {
        self.cells[slot.index()]
    }

    /// Returns true if the slot holds a mark.
    pub fn is_occupied(&self, slot: Slot) -> bool {
        matches!(self.get(slot), Cell::Marked(_))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Writes a mark into an empty cell.
    ///
    /// Returns false and leaves the board untouched if the cell is taken.
    pub(super) fn place(&mut self, slot: Slot, mark: Mark) -> bool {
        let cell = &mut self.cells[slot.index()];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = Cell::Marked(mark);
        true
    }

    fn glyph(&self, index: usize) -> char {
        match self.cells[index] {
            Cell::Empty => char::from(b'1' + index as u8),
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "- + - + -")?;
            }
            let base = row * 3;
            write!(
                f,
                "{} | {} | {}",
                self.glyph(base),
                self.glyph(base + 1),
                self.glyph(base + 2)
            )?;
        }
        Ok(())
    }
}
