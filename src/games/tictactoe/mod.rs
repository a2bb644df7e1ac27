//! Tic-tac-toe domain: board, slots, rules and the engine.

mod action;
mod engine;
pub mod rules;
mod slot;
mod types;

pub use action::MoveInput;
pub use engine::{GameEngine, MoveError};
pub use slot::{AvailableSlots, Slot};
pub use types::{Board, Cell, Mark};
