//! Top-level menu: pick a mode, play a session, repeat until quit.

use crate::console::{InputSource, OutputSink};
use crate::games::tictactoe::Mark;
use crate::players::{ComputerPlayer, Pause};
use crate::session::{GameMode, Outcome, run_session};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Printed once when the menu starts.
pub const BANNER: &str = "Tic-Tac-Toe";
/// Printed when the menu exits.
pub const FAREWELL: &str = "Thanks for playing!";
/// Prompt for a menu choice.
pub const MENU_PROMPT: &str = "Enter choice: ";
/// Shown on non-numeric menu input.
pub const NUMBERS_ONLY: &str = "Invalid choice. Enter numbers only.";
/// Shown on a number that names no option.
pub const INVALID_CHOICE: &str = "Invalid choice! Try again";

const MENU_LINES: [&str; 5] = ["", "Main Menu", "0. Quit", "1. Single Player", "2. Pass n Play"];

/// A main-menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuChoice {
    /// Leave the program.
    Quit,
    /// Play against the computer.
    SinglePlayer,
    /// Two humans, one terminal.
    PassAndPlay,
}

impl MenuChoice {
    /// Maps the number typed at the menu to an option.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            0 => Some(MenuChoice::Quit),
            1 => Some(MenuChoice::SinglePlayer),
            2 => Some(MenuChoice::PassAndPlay),
            _ => None,
        }
    }

    /// The session mode this option starts, if any.
    pub fn mode(self) -> Option<GameMode> {
        match self {
            MenuChoice::Quit => None,
            MenuChoice::SinglePlayer => Some(GameMode::SinglePlayer),
            MenuChoice::PassAndPlay => Some(GameMode::PassAndPlay),
        }
    }
}

/// Tally of finished sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct SessionSummary {
    x_wins: usize,
    o_wins: usize,
    ties: usize,
    quits: usize,
}

impl SessionSummary {
    /// Counts the outcomes.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut acc, outcome| {
            match outcome {
                Outcome::Won(Mark::X) => acc.x_wins += 1,
                Outcome::Won(Mark::O) => acc.o_wins += 1,
                Outcome::Tie => acc.ties += 1,
                Outcome::Quit => acc.quits += 1,
            }
            acc
        })
    }

    /// Total sessions counted.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.ties + self.quits
    }
}

/// Runs the menu until the user quits or input ends.
///
/// Returns the outcome of every session played, in order.
#[instrument(skip_all)]
pub fn run_menu<I, O, R, P>(
    input: &mut I,
    output: &mut O,
    computer: &mut ComputerPlayer<R, P>,
) -> Vec<Outcome>
where
    I: InputSource,
    O: OutputSink,
    R: Rng,
    P: Pause,
{
    let mut outcomes = Vec::new();
    output.show_message(BANNER);

    loop {
        for line in MENU_LINES {
            output.show_message(line);
        }
        let Some(number) = input.read_int(MENU_PROMPT, NUMBERS_ONLY) else {
            debug!("Input exhausted at menu");
            break;
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            output.show_message(INVALID_CHOICE);
            continue;
        };
        let Some(mode) = choice.mode() else {
            break;
        };

        info!(%mode, "Starting session");
        outcomes.push(run_session(mode, input, output, computer));
    }

    output.show_message(FAREWELL);
    outcomes
}
