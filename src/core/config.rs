//! Game configuration types.
//!
//! Both games ship with fixed defaults. The config structs exist so the
//! defaults are validated in one place at startup and so tests can build
//! small boards.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// Number of boxes on the pair-matching board.
pub const NUM_BOXES: usize = 20;

/// Number of guesses the player gets in the pair-matching game.
pub const NUM_LIVES: u32 = 40;

/// Boxes shown per rendered row.
pub const ROW_WIDTH: usize = 10;

/// Length of the secret in the digit-feedback game.
pub const NUM_DIGITS: usize = 4;

/// Symbols a box can hold.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Configuration for the pair-matching game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairGameConfig {
    /// Number of boxes. Must be even and non-zero.
    pub box_count: usize,

    /// Guesses available before the game is lost.
    pub lives: u32,

    /// Boxes per rendered row.
    pub row_width: usize,
}

impl Default for PairGameConfig {
    fn default() -> Self {
        Self {
            box_count: NUM_BOXES,
            lives: NUM_LIVES,
            row_width: ROW_WIDTH,
        }
    }
}

impl PairGameConfig {
    /// Set the number of boxes.
    #[must_use]
    pub fn with_box_count(mut self, count: usize) -> Self {
        self.box_count = count;
        self
    }

    /// Set the number of lives.
    #[must_use]
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Set the rendered row width.
    #[must_use]
    pub fn with_row_width(mut self, width: usize) -> Self {
        self.row_width = width;
        self
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<()> {
        if self.box_count == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.box_count % 2 != 0 {
            return Err(ConfigError::OddBoxCount(self.box_count));
        }
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.row_width == 0 {
            return Err(ConfigError::ZeroRowWidth);
        }
        Ok(())
    }
}

/// Configuration for the digit-feedback game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitGameConfig {
    /// Length of the secret and of every guess.
    pub digit_count: usize,
}

impl Default for DigitGameConfig {
    fn default() -> Self {
        Self {
            digit_count: NUM_DIGITS,
        }
    }
}

impl DigitGameConfig {
    /// Set the number of digits.
    #[must_use]
    pub fn with_digit_count(mut self, count: usize) -> Self {
        self.digit_count = count;
        self
    }

    /// Check the configuration describes a playable secret.
    pub fn validate(&self) -> Result<()> {
        if self.digit_count == 0 {
            return Err(ConfigError::NoDigits);
        }
        Ok(())
    }
}
