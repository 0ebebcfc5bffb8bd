//! Input collaborators.
//!
//! A `Prompter` hands sessions input that has already been validated.
//! Malformed input is handled inside the prompter by asking again, so the
//! engines never see it.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::core::SessionError;
use crate::games::digits::Digits;

/// Source of validated player input.
pub trait Prompter {
    /// Read an integer in the inclusive range `low..=high`.
    fn read_index(&mut self, low: usize, high: usize) -> Result<usize, SessionError>;

    /// Read exactly `count` decimal digits.
    fn read_digits(&mut self, count: usize) -> Result<Digits, SessionError>;
}

/// Line-based prompter over any reader/writer pair.
///
/// Invalid lines are answered with a hint on `output` and read again until
/// a valid one arrives or the input ends.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Give back the wrapped reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_line(&mut self) -> Result<&str, SessionError> {
        self.output.flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(self.line.trim())
    }

    fn hint(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    /// # Panics
    ///
    /// Panics if `low > high`.
    fn read_index(&mut self, low: usize, high: usize) -> Result<usize, SessionError> {
        assert!(low <= high, "low has to be less or equal to high");

        loop {
            let line = self.next_line()?;
            match line.parse::<i64>() {
                Ok(value) if value >= low as i64 && value <= high as i64 => {
                    return Ok(value as usize);
                }
                Ok(value) => {
                    warn!(value, low, high, "index out of range");
                    self.hint(&format!("please enter an integer between {} and {}:", low, high))?;
                }
                Err(_) => {
                    warn!(input = line, "not an integer");
                    self.hint("please enter an integer:")?;
                }
            }
        }
    }

    fn read_digits(&mut self, count: usize) -> Result<Digits, SessionError> {
        loop {
            let line = self.next_line()?;
            match Digits::parse(line, count) {
                Ok(digits) => return Ok(digits),
                Err(err) => {
                    warn!(%err, "rejected guess");
                    self.hint(&format!(
                        "Incorrect input. Please make a guess containing only {} digits:",
                        count
                    ))?;
                }
            }
        }
    }
}
