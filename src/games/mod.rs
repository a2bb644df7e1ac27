//! Games playable from the console.

pub mod tictactoe;
