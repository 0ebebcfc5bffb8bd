//! Turn loop for the digit-feedback game.

use std::io::Write;

use tracing::info;

use super::input::Prompter;
use super::render::render_result;
use crate::core::SessionError;
use crate::games::digits::{DigitGame, Digits};

/// How a finished digit game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitSummary {
    pub secret: Digits,
    pub rounds: u32,
}

/// Drives one `DigitGame` until the secret is guessed.
pub struct DigitSession<P, W> {
    game: DigitGame,
    prompter: P,
    output: W,
}

impl<P: Prompter, W: Write> DigitSession<P, W> {
    pub fn new(game: DigitGame, prompter: P, output: W) -> Self {
        Self {
            game,
            prompter,
            output,
        }
    }

    pub fn game(&self) -> &DigitGame {
        &self.game
    }

    /// Play until the secret is guessed. There is no attempt limit.
    pub fn run(mut self) -> Result<DigitSummary, SessionError> {
        let count = self.game.digit_count();
        info!(digits = count, "digit session started");

        writeln!(self.output, "Welcome!")?;
        writeln!(self.output, "You are about to guess a {}-digit number.", count)?;

        while !self.game.has_won() {
            writeln!(
                self.output,
                "Please make a guess containing only {} digits:",
                count
            )?;
            let guess = self.prompter.read_digits(count)?;
            let result = self.game.score_guess(&guess);

            if !self.game.has_won() {
                write!(self.output, "{}", render_result(&result))?;
            }
        }

        let summary = DigitSummary {
            secret: self.game.secret().clone(),
            rounds: self.game.rounds(),
        };

        writeln!(self.output, "You won! The magic number is: {}", summary.secret)?;
        writeln!(self.output, "You used {} attempts.", summary.rounds)?;
        self.output.flush()?;

        info!(rounds = summary.rounds, "digit session finished");
        Ok(summary)
    }
}
