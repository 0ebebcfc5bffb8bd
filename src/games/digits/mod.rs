//! Digit-feedback "guess game".
//!
//! A hidden number of fixed length is scored against each guess as the
//! count of correct digits and the count of misplaced digits. There is no
//! attempt limit.

mod game;
mod sequence;

pub use game::{score, DigitGame, GuessResult};
pub use sequence::{Digits, DigitsParseError};
