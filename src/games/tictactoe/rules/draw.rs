//! Tie detection logic for tic-tac-toe.

use super::super::{AvailableSlots, Board, Cell, Mark};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A tie: no open slots left and the last mover did not complete a line.
///
/// A winning move may also fill the last slot, so the win check
/// takes precedence.
#[instrument(skip(available, board))]
pub fn is_tie(available: &AvailableSlots, board: &Board, last_mover: Option<Mark>) -> bool {
    if !available.is_empty() {
        return false;
    }
    match last_mover {
        Some(mark) => !has_won(board, mark),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Slot;
    use super::*;

    fn play(moves: &[(Slot, Mark)]) -> (Board, AvailableSlots) {
        let mut board = Board::new();
        let mut open = AvailableSlots::full();
        for &(slot, mark) in moves {
            assert!(board.place(slot, mark));
            assert!(open.remove(slot));
        }
        (board, open)
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_is_not_tie() {
        let (board, open) = play(&[(Slot::Center, Mark::X)]);
        assert!(!is_full(&board));
        assert!(!is_tie(&open, &board, Some(Mark::X)));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let (board, open) = play(&[
            (Slot::TopLeft, Mark::X),
            (Slot::TopCenter, Mark::O),
            (Slot::TopRight, Mark::X),
            (Slot::Center, Mark::O),
            (Slot::MiddleLeft, Mark::X),
            (Slot::MiddleRight, Mark::O),
            (Slot::BottomCenter, Mark::X),
            (Slot::BottomLeft, Mark::O),
            (Slot::BottomRight, Mark::X),
        ]);
        assert!(is_full(&board));
        assert!(is_tie(&open, &board, Some(Mark::X)));
    }

    #[test]
    fn test_full_board_with_winning_last_move_is_not_tie() {
        // X X X / O O X / X O O, last move completes the top row.
        let (board, open) = play(&[
            (Slot::TopLeft, Mark::X),
            (Slot::Center, Mark::O),
            (Slot::MiddleRight, Mark::X),
            (Slot::MiddleLeft, Mark::O),
            (Slot::BottomLeft, Mark::X),
            (Slot::BottomCenter, Mark::O),
            (Slot::TopCenter, Mark::X),
            (Slot::BottomRight, Mark::O),
            (Slot::TopRight, Mark::X),
        ]);
        assert!(is_full(&board));
        assert!(!is_tie(&open, &board, Some(Mark::X)));
    }
}
