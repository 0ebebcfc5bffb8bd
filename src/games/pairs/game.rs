//! Pair-matching engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::Board;
use crate::core::{GameRng, PairGameConfig, Result};
use crate::secret::generate_pair_symbols;

/// Where the player is within a pair attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingGuess {
    /// Next guess opens a new pair attempt.
    #[default]
    AwaitingFirst,
    /// Next guess is compared against the box at this index.
    AwaitingSecond(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a single guess did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Box was already revealed. Nothing changed and no turn was used.
    Repeat,
    /// First box of a pair revealed.
    Opened { index: usize, symbol: char },
    /// Second box matched the first; both stay revealed.
    Matched {
        first: usize,
        second: usize,
        symbol: char,
    },
    /// Second box differed; both are concealed again.
    Mismatched {
        first: usize,
        first_symbol: char,
        second: usize,
        second_symbol: char,
    },
}

impl GuessOutcome {
    /// Whether the guess consumed a turn.
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Repeat)
    }
}

/// Memory-style game: reveal two boxes per attempt, matching pairs stay open.
///
/// Every accepted guess costs one turn, so a full pair attempt costs two.
#[derive(Clone, Debug)]
pub struct PairGame {
    board: Board,
    pending: PendingGuess,
    turns_remaining: u32,
    outcome: GameOutcome,
}

impl PairGame {
    /// Create a game with a freshly generated board.
    pub fn new(config: &PairGameConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let symbols = generate_pair_symbols(config.box_count, rng)?;
        Ok(Self::from_board(Board::from_symbols(symbols), config.lives))
    }

    /// Create a game from an existing board.
    pub fn from_board(board: Board, lives: u32) -> Self {
        let mut game = Self {
            board,
            pending: PendingGuess::AwaitingFirst,
            turns_remaining: lives,
            outcome: GameOutcome::InProgress,
        };
        game.update_outcome();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pending(&self) -> PendingGuess {
        self.pending
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Guess the box at `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index` is off the board or the game is already over.
    /// Both are checked by the caller before a guess reaches the engine.
    pub fn submit_guess(&mut self, index: usize) -> GuessOutcome {
        assert!(
            index < self.board.len(),
            "Guess index {} out of range for {} boxes",
            index,
            self.board.len()
        );
        assert!(!self.is_finished(), "Game already ended, no new guesses are accepted");

        let tile = self.board.tile(index);
        if tile.is_revealed() {
            debug!(index, "repeat guess ignored");
            return GuessOutcome::Repeat;
        }

        let result = match self.pending {
            PendingGuess::AwaitingFirst => {
                self.board.set_revealed(index, true);
                self.pending = PendingGuess::AwaitingSecond(index);
                GuessOutcome::Opened {
                    index,
                    symbol: tile.symbol(),
                }
            }
            PendingGuess::AwaitingSecond(first) => {
                let prior = self.board.tile(first);
                self.pending = PendingGuess::AwaitingFirst;

                if prior.symbol() == tile.symbol() {
                    self.board.set_revealed(index, true);
                    GuessOutcome::Matched {
                        first,
                        second: index,
                        symbol: tile.symbol(),
                    }
                } else {
                    self.board.set_revealed(first, false);
                    GuessOutcome::Mismatched {
                        first,
                        first_symbol: prior.symbol(),
                        second: index,
                        second_symbol: tile.symbol(),
                    }
                }
            }
        };

        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        self.update_outcome();

        debug!(?result, turns_remaining = self.turns_remaining, "guess processed");
        if self.is_finished() {
            info!(outcome = ?self.outcome, "pair game finished");
        }

        result
    }

    fn update_outcome(&mut self) {
        self.outcome = if self.board.all_revealed() {
            GameOutcome::Won
        } else if self.turns_remaining == 0 {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        };
    }
}
