//! # guessing-games
//!
//! Two turn-based console guessing games built on small, pure game engines.
//!
//! ## Games
//!
//! - **Box game** (`games::pairs`): 20 boxes hide 10 pairs of letters. Open
//!   two boxes per attempt; matching letters stay open. Reveal every box
//!   within 40 guesses.
//! - **Guess game** (`games::digits`): deduce a hidden 4-digit number from
//!   the count of correct and misplaced digits in each guess.
//!
//! ## Design Principles
//!
//! 1. **Pure engines**: Engines hold their own state and do no I/O. They
//!    accept validated input only; contract violations panic.
//!
//! 2. **Explicit collaborators**: Randomness (`GameRng`) and input
//!    (`Prompter`) are passed in, so every session can be replayed from a
//!    seed and scripted in tests.
//!
//! 3. **No shared abstraction**: The two engines share nothing but the
//!    session pattern around them.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, process startup
//! - `secret`: Board and secret generation
//! - `games`: The pair-matching and digit-feedback engines
//! - `session`: Console turn loops, input validation, rendering

pub mod core;
pub mod games;
pub mod secret;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, DigitGameConfig, GameRng, PairGameConfig, SessionError};

pub use crate::games::digits::{score, DigitGame, Digits, GuessResult};
pub use crate::games::pairs::{Board, GameOutcome, GuessOutcome, PairGame, PendingGuess, Tile};

pub use crate::session::{
    ConsolePrompter, DigitSession, DigitSummary, PairSession, PairSummary, Prompter,
};
