//! Line-oriented reader/writer implementations of the console traits.

use super::{InputSource, OutputSink};
use crate::games::tictactoe::Board;
use std::io::{BufRead, Write};
use tracing::{trace, warn};

/// Reads answers line by line, writing prompts to its own writer.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Wraps a reader and the writer its prompts go to.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the input and returns the prompt writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_prompt(&mut self, prompt: &str) {
        if let Err(e) = write!(self.writer, "{prompt}").and_then(|()| self.writer.flush()) {
            warn!(error = %e, "Failed to write prompt");
        }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_int(&mut self, prompt: &str, invalid_message: &str) -> Option<i64> {
        let mut bytes = Vec::new();
        loop {
            self.write_prompt(prompt);
            bytes.clear();
            match self.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    return None;
                }
            }
            // Undecodable bytes become U+FFFD and fail to parse like any other junk.
            let line = String::from_utf8_lossy(&bytes);
            trace!(input = %line.trim_end(), "Read line");
            match line.trim().parse::<i64>() {
                Ok(n) => return Some(n),
                Err(_) => self.notify(invalid_message),
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}") {
            warn!(error = %e, "Failed to write notice");
        }
    }
}

/// Writes boards and messages as plain text lines.
#[derive(Debug)]
pub struct LineOutput<W> {
    writer: W,
}

impl<W: Write> LineOutput<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for LineOutput<W> {
    fn show_board(&mut self, board: &Board) {
        if let Err(e) = writeln!(self.writer, "\n{board}") {
            warn!(error = %e, "Failed to render board");
        }
    }

    fn show_message(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}").and_then(|()| self.writer.flush()) {
            warn!(error = %e, "Failed to write message");
        }
    }
}
