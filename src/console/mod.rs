//! Console collaborators: where moves come from and where the game is shown.
//!
//! The session loop talks only to these traits. [`LineInput`] and
//! [`LineOutput`] implement them over any reader/writer pair, which is
//! stdin/stdout in the binary and in-memory buffers in tests.

mod terminal;

pub use terminal::{LineInput, LineOutput};

use crate::games::tictactoe::{Board, MoveInput, Slot};
use tracing::{debug, instrument};

/// Shown when a move is not a number in 1-9.
pub const MOVE_OUT_OF_RANGE: &str = "Enter numbers only in range 1-9";
/// Shown when a move names an occupied slot.
pub const SLOT_TAKEN: &str = "Slots already taken! Try again!";

/// Source of user choices.
pub trait InputSource {
    /// Prompts for one integer, retrying with `invalid_message` until the
    /// input parses. Returns `None` once input is exhausted.
    fn read_int(&mut self, prompt: &str, invalid_message: &str) -> Option<i64>;

    /// Tells the user why their last answer was refused.
    fn notify(&mut self, message: &str);

    /// Prompts until the user names an open slot or asks to quit.
    ///
    /// `0` and end of input both mean quit. Never returns an occupied
    /// or out-of-range slot.
    #[instrument(skip(self, board))]
    fn read_move(&mut self, prompt: &str, board: &Board) -> MoveInput {
        loop {
            let Some(number) = self.read_int(prompt, MOVE_OUT_OF_RANGE) else {
                debug!("Input exhausted, treating as quit");
                return MoveInput::Quit;
            };
            if number == 0 {
                return MoveInput::Quit;
            }
            match Slot::from_number(number) {
                None => self.notify(MOVE_OUT_OF_RANGE),
                Some(slot) if board.is_occupied(slot) => self.notify(SLOT_TAKEN),
                Some(slot) => return MoveInput::Move(slot),
            }
        }
    }
}

/// Destination for everything the game shows.
pub trait OutputSink {
    /// Renders the board grid.
    fn show_board(&mut self, board: &Board);

    /// Prints one line of text.
    fn show_message(&mut self, message: &str);
}
