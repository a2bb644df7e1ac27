//! Console tic-tac-toe.
//!
//! Two modes: pass-and-play between two humans, and single-player
//! against a computer that picks a random open slot.
//!
//! # Architecture
//!
//! - **Engine**: board, open slots, win and tie rules ([`GameEngine`])
//! - **Session**: the turn loop for one game ([`GameLoop`])
//! - **Console**: [`InputSource`] and [`OutputSink`] collaborators
//! - **Menu**: repeated sessions until the user quits ([`run_menu`])
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use strictly_tictactoe_console::{
//!     ComputerPlayer, GameMode, LineInput, LineOutput, Mark, NoPause, Outcome, run_session,
//! };
//! use std::io::Cursor;
//! use std::time::Duration;
//!
//! let mut input = LineInput::new(Cursor::new("1\n4\n2\n5\n3\n"), Vec::new());
//! let mut output = LineOutput::new(Vec::new());
//! let mut computer = ComputerPlayer::new(StdRng::seed_from_u64(1), NoPause, Duration::ZERO);
//!
//! let outcome = run_session(GameMode::PassAndPlay, &mut input, &mut output, &mut computer);
//! assert_eq!(outcome, Outcome::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;
mod menu;
mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console collaborators
pub use console::{InputSource, LineInput, LineOutput, MOVE_OUT_OF_RANGE, OutputSink, SLOT_TAKEN};

// Crate-level exports - Game types
pub use games::tictactoe::{
    AvailableSlots, Board, Cell, GameEngine, Mark, MoveError, MoveInput, Slot, rules,
};

// Crate-level exports - Players
pub use players::{ComputerPlayer, DEFAULT_THINK_TIME, NoPause, Pause, ThreadPause};

// Crate-level exports - Session
pub use session::{
    COMPUTER_TURN, GameLoop, GameMode, O_WON, Outcome, PROMPT_O, PROMPT_X, SessionState, TIE,
    X_WON, YOU_LOST, run_session, win_message,
};

// Crate-level exports - Menu
pub use menu::{
    BANNER, FAREWELL, INVALID_CHOICE, MENU_PROMPT, MenuChoice, NUMBERS_ONLY, SessionSummary,
    run_menu,
};
