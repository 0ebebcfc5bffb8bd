//! Core building blocks shared by both games: RNG, configuration, errors,
//! process startup.
//!
//! Nothing in here knows about boxes or digits beyond the fixed constants.

pub mod config;
pub mod error;
pub mod rng;
pub mod runtime;

pub use config::{
    DigitGameConfig, PairGameConfig, ALPHABET, NUM_BOXES, NUM_DIGITS, NUM_LIVES, ROW_WIDTH,
};
pub use error::{ConfigError, Result, SessionError};
pub use rng::GameRng;
pub use runtime::{init_logging, rng_from_env, rng_from_seed, SEED_ENV};
