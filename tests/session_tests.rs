//! Console session integration tests.
//!
//! Sessions are driven either by the console prompter over in-memory
//! buffers or by a scripted prompter that replays fixed input.

use std::collections::VecDeque;
use std::io::Cursor;

use guessing_games::core::SessionError;
use guessing_games::games::digits::{DigitGame, Digits};
use guessing_games::games::pairs::{Board, GameOutcome, PairGame};
use guessing_games::session::{
    ConsolePrompter, DigitSession, PairSession, PairSummary, Prompter,
};

/// Prompter that replays prepared answers, then reports closed input.
#[derive(Default)]
struct ScriptedPrompter {
    indices: VecDeque<usize>,
    guesses: VecDeque<Digits>,
}

impl ScriptedPrompter {
    fn indices(indices: &[usize]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn guesses(guesses: &[&str]) -> Self {
        Self {
            guesses: guesses.iter().map(|g| g.parse().unwrap()).collect(),
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_index(&mut self, low: usize, high: usize) -> Result<usize, SessionError> {
        let index = self.indices.pop_front().ok_or(SessionError::InputClosed)?;
        assert!((low..=high).contains(&index));
        Ok(index)
    }

    fn read_digits(&mut self, count: usize) -> Result<Digits, SessionError> {
        let guess = self.guesses.pop_front().ok_or(SessionError::InputClosed)?;
        assert_eq!(guess.len(), count);
        Ok(guess)
    }
}

fn console(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn play_pairs(symbols: &str, lives: u32, indices: &[usize]) -> (PairSummary, String) {
    let game = PairGame::from_board(Board::from_symbols(symbols.chars()), lives);
    let mut output = Vec::new();

    let summary = PairSession::new(game, ScriptedPrompter::indices(indices), &mut output)
        .with_row_width(4)
        .run()
        .unwrap();

    (summary, String::from_utf8(output).unwrap())
}

// =============================================================================
// Pair Sessions
// =============================================================================

/// Test a won game, including a repeat guess and the turn report.
#[test]
fn test_pair_session_win() {
    let (summary, output) = play_pairs("AABB", 10, &[1, 1, 2, 3, 4]);

    assert_eq!(summary.outcome, GameOutcome::Won);
    assert_eq!(summary.turns_remaining, 6);
    assert_eq!(summary.symbols, "AABB");

    assert!(output.starts_with("Welcome to the box game.\n"));
    assert!(output.contains(
        "You have 10 guesses left. The boxes:\n1234\n####\nPlease take a guess (from 1 to 4):\n"
    ));
    assert!(output.contains("Box 1 holds A.\n"));
    assert!(output.contains("You have 9 guesses left. The boxes:\n1234\nA###\n"));
    assert!(output.contains("You have guessed it. Try another one:\n"));
    assert!(output.contains("Match! Boxes 1 and 2 both hold A.\n"));
    assert!(output.ends_with("Congratulations! You win!\n"));
}

/// Test a lost game prints the whole board.
#[test]
fn test_pair_session_loss() {
    let (summary, output) = play_pairs("ABAB", 2, &[1, 2]);

    assert_eq!(summary.outcome, GameOutcome::Lost);
    assert_eq!(summary.turns_remaining, 0);
    assert!(output.contains("No match: box 1 holds A, box 2 holds B.\n"));
    assert!(output.ends_with("You have no more guesses!\nHere are all the boxes:\nABAB\n"));
}

/// Test that a mismatch is concealed again on the next render.
#[test]
fn test_pair_session_mismatch_rerenders_concealed() {
    let (_, output) = play_pairs("ABAB", 3, &[1, 2, 4]);

    assert!(output.contains("You have 1 guesses left. The boxes:\n1234\n####\n"));
}

/// Test that closed input ends the session with an error.
#[test]
fn test_pair_session_input_closed() {
    let game = PairGame::from_board(Board::from_symbols("AABB".chars()), 10);

    let result = PairSession::new(game, ScriptedPrompter::indices(&[1]), Vec::new()).run();

    assert!(matches!(result, Err(SessionError::InputClosed)));
}

/// Test the console prompter feeding a session, including bad lines.
#[test]
fn test_pair_session_over_console() {
    let game = PairGame::from_board(Board::from_symbols("ABBA".chars()), 10);
    let mut output = Vec::new();

    let summary = PairSession::new(game, console("one\n9\n1\n4\n2\n3\n"), &mut output)
        .run()
        .unwrap();

    assert_eq!(summary.outcome, GameOutcome::Won);
    assert_eq!(summary.turns_remaining, 6);
}

// =============================================================================
// Digit Sessions
// =============================================================================

/// Test the full transcript of a two-round game.
#[test]
fn test_digit_session_transcript() {
    let game = DigitGame::from_secret("3456".parse().unwrap());
    let mut output = Vec::new();

    let summary = DigitSession::new(game, ScriptedPrompter::guesses(&["1736", "3456"]), &mut output)
        .run()
        .unwrap();

    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.secret.to_string(), "3456");
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Welcome!\n\
         You are about to guess a 4-digit number.\n\
         Please make a guess containing only 4 digits:\n\
         The number of correct digits: 1\n\
         The number of misplaced digits: 1\n\
         Please make a guess containing only 4 digits:\n\
         You won! The magic number is: 3456\n\
         You used 2 attempts.\n"
    );
}

/// Test that invalid guesses are re-prompted without counting a round.
#[test]
fn test_digit_session_over_console() {
    let game = DigitGame::from_secret("0042".parse().unwrap());

    let summary = DigitSession::new(game, console("42\nabcd\n0042\n"), Vec::new())
        .run()
        .unwrap();

    assert_eq!(summary.rounds, 1);
}

/// Test that closed input ends the session with an error.
#[test]
fn test_digit_session_input_closed() {
    let game = DigitGame::from_secret("1111".parse().unwrap());

    let result = DigitSession::new(game, ScriptedPrompter::guesses(&["2222"]), Vec::new()).run();

    assert!(matches!(result, Err(SessionError::InputClosed)));
}
