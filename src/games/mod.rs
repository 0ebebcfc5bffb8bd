//! The two game engines.
//!
//! The engines share no behavior and no trait. Each is a pure in-memory
//! state machine that takes an already-validated guess.

pub mod digits;
pub mod pairs;
