//! Game rules for tic-tac-toe.
//!
//! Pure functions over board state. Rules are kept apart from the
//! engine's bookkeeping so they can be checked on any board.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, has_won, winner, winning_line};
