//! One game session: the turn loop from an empty board to win, tie or quit.

use crate::console::{InputSource, OutputSink};
use crate::games::tictactoe::{GameEngine, Mark, MoveInput, Slot, rules};
use crate::players::{ComputerPlayer, Pause};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Prompt for player X.
pub const PROMPT_X: &str = "Enter choice player X: ";
/// Prompt for player O in pass-and-play.
pub const PROMPT_O: &str = "Enter choice player O: ";
/// Announced before the computer moves.
pub const COMPUTER_TURN: &str = "Computer's turn...";
/// X completed a line.
pub const X_WON: &str = "Congratulations! Player X won.";
/// O completed a line in pass-and-play.
pub const O_WON: &str = "Congratulations! Player O won.";
/// The computer completed a line.
pub const YOU_LOST: &str = "Game Over! You lost.";
/// Board filled without a winner.
pub const TIE: &str = "It's a tie!";

/// Who plays O. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameMode {
    /// O is the computer.
    SinglePlayer,
    /// O is a second human at the same terminal.
    PassAndPlay,
}

/// Turn-loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting for X's move.
    AwaitingX,
    /// Waiting for O's move.
    AwaitingO,
    /// A mark completed a line.
    Won(Mark),
    /// Board filled without a winner.
    Tie,
    /// A player quit.
    Quit,
}

impl SessionState {
    /// The terminal outcome, if the session is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            SessionState::AwaitingX | SessionState::AwaitingO => None,
            SessionState::Won(mark) => Some(Outcome::Won(mark)),
            SessionState::Tie => Some(Outcome::Tie),
            SessionState::Quit => Some(Outcome::Quit),
        }
    }

    fn awaiting(mark: Mark) -> Self {
        match mark {
            Mark::X => SessionState::AwaitingX,
            Mark::O => SessionState::AwaitingO,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark won.
    Won(Mark),
    /// Nobody won.
    Tie,
    /// A player abandoned the session.
    Quit,
}

/// Drives a single session between the console and the engine.
pub struct GameLoop<'a, I, O, R, P> {
    mode: GameMode,
    engine: GameEngine,
    state: SessionState,
    input: &'a mut I,
    output: &'a mut O,
    computer: &'a mut ComputerPlayer<R, P>,
}

impl<'a, I, O, R, P> GameLoop<'a, I, O, R, P>
where
    I: InputSource,
    O: OutputSink,
    R: Rng,
    P: Pause,
{
    /// Starts a session with a fresh board, X to move.
    #[instrument(skip(input, output, computer))]
    pub fn new(
        mode: GameMode,
        input: &'a mut I,
        output: &'a mut O,
        computer: &'a mut ComputerPlayer<R, P>,
    ) -> Self {
        Self {
            mode,
            engine: GameEngine::new(),
            state: SessionState::AwaitingX,
            input,
            output,
            computer,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session's engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Advances one turn. Terminal states are returned unchanged.
    #[instrument(skip(self), fields(mode = %self.mode, state = ?self.state))]
    pub fn step(&mut self) -> SessionState {
        self.state = match self.state {
            SessionState::AwaitingX => self.human_turn(Mark::X, PROMPT_X),
            SessionState::AwaitingO => match self.mode {
                GameMode::SinglePlayer => self.computer_turn(),
                GameMode::PassAndPlay => self.human_turn(Mark::O, PROMPT_O),
            },
            terminal => terminal,
        };
        self.state
    }

    /// Plays the session to completion and announces the result.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn run(mut self) -> Outcome {
        let outcome = loop {
            if let Some(outcome) = self.step().outcome() {
                break outcome;
            }
        };
        self.announce(outcome);
        info!(
            ?outcome,
            winner = ?rules::winner(self.engine.board()),
            board_full = rules::is_full(self.engine.board()),
            moves = self.engine.moves_played(),
            "Session finished"
        );
        outcome
    }

    fn human_turn(&mut self, mark: Mark, prompt: &str) -> SessionState {
        self.output.show_board(self.engine.board());
        match self.input.read_move(prompt, self.engine.board()) {
            MoveInput::Quit => {
                debug!(%mark, "Player quit");
                SessionState::Quit
            }
            MoveInput::Move(slot) => self.play(slot, mark),
        }
    }

    fn computer_turn(&mut self) -> SessionState {
        self.output.show_message(COMPUTER_TURN);
        match self.computer.choose_move(&self.engine) {
            Some(slot) => self.play(slot, Mark::O),
            None => {
                warn!("Computer asked to move on a full board");
                SessionState::Tie
            }
        }
    }

    /// Applies a move and decides what comes next. Win is checked before
    /// exhaustion, so a winning final move is never reported as a tie.
    fn play(&mut self, slot: Slot, mark: Mark) -> SessionState {
        if let Err(e) = self.engine.apply_move(slot, mark) {
            warn!(error = %e, "Input source returned an occupied slot; retrying turn");
            return SessionState::awaiting(mark);
        }
        debug!(%mark, slot = slot.label(), "Turn played");
        if self.engine.has_won(mark) {
            debug!(
                %mark,
                line = ?rules::winning_line(self.engine.board(), mark),
                "Line completed"
            );
            SessionState::Won(mark)
        } else if self.engine.available().is_empty() {
            SessionState::Tie
        } else {
            SessionState::awaiting(mark.opponent())
        }
    }

    fn announce(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(mark) => {
                self.output.show_board(self.engine.board());
                self.output.show_message(win_message(self.mode, mark));
            }
            Outcome::Tie => self.output.show_message(TIE),
            Outcome::Quit => {}
        }
    }
}

/// Result line for a win by `mark`.
pub fn win_message(mode: GameMode, mark: Mark) -> &'static str {
    match (mode, mark) {
        (_, Mark::X) => X_WON,
        (GameMode::SinglePlayer, Mark::O) => YOU_LOST,
        (GameMode::PassAndPlay, Mark::O) => O_WON,
    }
}

/// Runs one session from a fresh board.
pub fn run_session<I, O, R, P>(
    mode: GameMode,
    input: &mut I,
    output: &mut O,
    computer: &mut ComputerPlayer<R, P>,
) -> Outcome
where
    I: InputSource,
    O: OutputSink,
    R: Rng,
    P: Pause,
{
    GameLoop::new(mode, input, output, computer).run()
}
