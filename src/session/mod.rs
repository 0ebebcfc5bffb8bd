//! Console sessions: the turn loops around each engine.
//!
//! Each turn pulls validated input from a [`Prompter`], feeds the engine,
//! checks for the end of the game and writes the new state out. Input and
//! output are generic so sessions run the same over stdin/stdout or over
//! in-memory buffers.

mod digits;
mod input;
mod pairs;
mod render;

pub use digits::{DigitSession, DigitSummary};
pub use input::{ConsolePrompter, Prompter};
pub use pairs::{PairSession, PairSummary};
pub use render::{render_board, render_result, render_symbols};
