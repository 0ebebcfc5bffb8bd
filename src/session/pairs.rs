//! Turn loop for the pair-matching game.

use std::io::Write;

use tracing::info;

use super::input::Prompter;
use super::render::{render_board, render_symbols};
use crate::core::{SessionError, ROW_WIDTH};
use crate::games::pairs::{GameOutcome, GuessOutcome, PairGame};

/// How a finished pair game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairSummary {
    pub outcome: GameOutcome,
    pub turns_remaining: u32,
    /// Every symbol on the board, in order.
    pub symbols: String,
}

/// Drives one `PairGame` to completion.
pub struct PairSession<P, W> {
    game: PairGame,
    prompter: P,
    output: W,
    row_width: usize,
}

impl<P: Prompter, W: Write> PairSession<P, W> {
    pub fn new(game: PairGame, prompter: P, output: W) -> Self {
        Self {
            game,
            prompter,
            output,
            row_width: ROW_WIDTH,
        }
    }

    #[must_use]
    pub fn with_row_width(mut self, width: usize) -> Self {
        self.row_width = width;
        self
    }

    pub fn game(&self) -> &PairGame {
        &self.game
    }

    /// Play until the game is won or lost.
    pub fn run(mut self) -> Result<PairSummary, SessionError> {
        info!(
            boxes = self.game.board().len(),
            turns = self.game.turns_remaining(),
            "pair session started"
        );

        writeln!(self.output, "Welcome to the box game.")?;
        writeln!(
            self.output,
            "Open two boxes per attempt. Matching letters stay open; reveal them all to win."
        )?;

        while !self.game.is_finished() {
            self.play_turn()?;
        }

        let summary = PairSummary {
            outcome: self.game.outcome(),
            turns_remaining: self.game.turns_remaining(),
            symbols: render_symbols(self.game.board()),
        };

        match summary.outcome {
            GameOutcome::Won => writeln!(self.output, "Congratulations! You win!")?,
            _ => {
                writeln!(self.output, "You have no more guesses!")?;
                writeln!(self.output, "Here are all the boxes:")?;
                writeln!(self.output, "{}", summary.symbols)?;
            }
        }
        self.output.flush()?;

        info!(outcome = ?summary.outcome, "pair session finished");
        Ok(summary)
    }

    fn play_turn(&mut self) -> Result<(), SessionError> {
        let box_count = self.game.board().len();

        writeln!(
            self.output,
            "You have {} guesses left. The boxes:",
            self.game.turns_remaining()
        )?;
        write!(self.output, "{}", render_board(self.game.board(), self.row_width))?;
        writeln!(self.output, "Please take a guess (from 1 to {}):", box_count)?;

        loop {
            let index = self.prompter.read_index(1, box_count)? - 1;
            match self.game.submit_guess(index) {
                GuessOutcome::Repeat => {
                    writeln!(self.output, "You have guessed it. Try another one:")?;
                }
                outcome => return self.report(outcome),
            }
        }
    }

    fn report(&mut self, outcome: GuessOutcome) -> Result<(), SessionError> {
        match outcome {
            GuessOutcome::Opened { index, symbol } => {
                writeln!(self.output, "Box {} holds {}.", index + 1, symbol)?;
            }
            GuessOutcome::Matched { first, second, symbol } => {
                writeln!(
                    self.output,
                    "Match! Boxes {} and {} both hold {}.",
                    first + 1,
                    second + 1,
                    symbol
                )?;
            }
            GuessOutcome::Mismatched {
                first,
                first_symbol,
                second,
                second_symbol,
            } => {
                writeln!(
                    self.output,
                    "No match: box {} holds {}, box {} holds {}.",
                    first + 1,
                    first_symbol,
                    second + 1,
                    second_symbol
                )?;
            }
            GuessOutcome::Repeat => {}
        }
        Ok(())
    }
}
