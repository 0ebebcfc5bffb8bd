//! Pair-matching "box game".
//!
//! A row of boxes hides paired letters. The player opens two boxes per
//! attempt: matching letters stay revealed, anything else is hidden again.
//! Reveal every box before the guesses run out to win.

mod board;
mod game;

pub use board::{Board, Tile, HIDDEN_GLYPH};
pub use game::{GameOutcome, GuessOutcome, PairGame, PendingGuess};
