//! Error types shared by both games.

use thiserror::Error;

/// Invalid game configuration. Fatal at startup.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The number of boxes has to be even, got {0}")]
    OddBoxCount(usize),
    #[error("The board needs at least one pair of boxes")]
    EmptyBoard,
    #[error("The number of lives has to be positive")]
    NoLives,
    #[error("The row width has to be positive")]
    ZeroRowWidth,
    #[error("The number of digits has to be positive")]
    NoDigits,
    #[error("GUESSING_GAMES_SEED must be an unsigned integer")]
    InvalidSeed,
}

/// Failure while running a console session.
///
/// Malformed input never shows up here; the prompter re-prompts instead.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed before the game ended")]
    InputClosed,
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
