//! Secret generation for both games.
//!
//! Generators only need a count and a `GameRng`. They know nothing about
//! boards or scoring, so either engine can be built from hand-written
//! secrets in tests.

mod generator;

pub use generator::{generate_digits, generate_pair_symbols};
