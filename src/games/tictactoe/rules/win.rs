//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Slot};
use tracing::instrument;

/// The 8 winning lines as board indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `mark` holds all three cells of any line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = Cell::Marked(mark);
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == target))
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

/// The first complete line held by `mark`, as slots.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Slot; 3]> {
    let target = Cell::Marked(mark);
    let cells = board.cells();
    let line = LINES
        .iter()
        .find(|line| line.iter().all(|&i| cells[i] == target))?;
    Some([
        Slot::from_index(line[0])?,
        Slot::from_index(line[1])?,
        Slot::from_index(line[2])?,
    ])
}
