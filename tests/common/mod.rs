//! Shared test doubles for driving sessions without a terminal.

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Duration;
use strictly_tictactoe_console::{
    Board, ComputerPlayer, InputSource, MoveInput, NoPause, OutputSink, Slot,
};

/// Answers prompts from a fixed list of numbers, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<i64>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedInput {
    pub fn new(answers: &[i64]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_int(&mut self, prompt: &str, _invalid_message: &str) -> Option<i64> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front()
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Always plays the lowest-numbered open slot.
#[derive(Debug, Default)]
pub struct FirstOpenInput;

impl InputSource for FirstOpenInput {
    fn read_int(&mut self, _prompt: &str, _invalid_message: &str) -> Option<i64> {
        None
    }

    fn notify(&mut self, _message: &str) {}

    fn read_move(&mut self, _prompt: &str, board: &Board) -> MoveInput {
        Slot::ALL
            .into_iter()
            .find(|slot| !board.is_occupied(*slot))
            .map_or(MoveInput::Quit, MoveInput::Move)
    }
}

/// Ignores the board and always answers with the same slot.
#[derive(Debug)]
pub struct StubbornInput(pub Slot);

impl InputSource for StubbornInput {
    fn read_int(&mut self, _prompt: &str, _invalid_message: &str) -> Option<i64> {
        None
    }

    fn notify(&mut self, _message: &str) {}

    fn read_move(&mut self, _prompt: &str, _board: &Board) -> MoveInput {
        MoveInput::Move(self.0)
    }
}

/// Something shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Board(Board),
    Message(String),
}

/// Records everything shown, in order.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub shown: Vec<Shown>,
}

impl RecordingOutput {
    pub fn boards(&self) -> Vec<&Board> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Board(b) => Some(b),
                Shown::Message(_) => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Message(m) => Some(m.as_str()),
                Shown::Board(_) => None,
            })
            .collect()
    }

    pub fn count(&self, message: &str) -> usize {
        self.messages().iter().filter(|m| **m == message).count()
    }
}

impl OutputSink for RecordingOutput {
    fn show_board(&mut self, board: &Board) {
        self.shown.push(Shown::Board(board.clone()));
    }

    fn show_message(&mut self, message: &str) {
        self.shown.push(Shown::Message(message.to_string()));
    }
}

/// Seeded computer that never sleeps.
pub fn computer(seed: u64) -> ComputerPlayer<StdRng, NoPause> {
    ComputerPlayer::new(StdRng::seed_from_u64(seed), NoPause, Duration::ZERO)
}
