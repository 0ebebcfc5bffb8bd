//! Digit-feedback engine and scoring.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::sequence::Digits;
use crate::core::{DigitGameConfig, GameRng, Result};
use crate::secret::generate_digits;

/// Feedback for one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    /// Digits equal to the secret at the same position.
    pub correct: usize,
    /// Wrong-position digits that appear elsewhere in the secret.
    pub misplaced: usize,
}

/// Score `guess` against `secret`.
///
/// A guess digit that is not correct counts as misplaced when the same
/// digit sits anywhere else in the secret. Secret digits are not consumed,
/// so one secret digit can make several guess digits misplaced.
///
/// ```
/// use guessing_games::games::digits::{score, Digits};
///
/// let result = score(&Digits::new([3, 4, 5, 6]), &Digits::new([1, 7, 3, 6]));
/// assert_eq!((result.correct, result.misplaced), (1, 1));
/// ```
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn score(secret: &Digits, guess: &Digits) -> GuessResult {
    assert_eq!(
        secret.len(),
        guess.len(),
        "Guess length must match the secret length"
    );

    let secret = secret.as_slice();
    let guess = guess.as_slice();

    // First sweep: exact positions
    let correct = guess
        .iter()
        .zip(secret)
        .filter(|(g, s)| g == s)
        .count();

    // Second sweep: same digit somewhere else
    let misplaced = guess
        .iter()
        .enumerate()
        .filter(|&(i, &g)| g != secret[i])
        .filter(|&(i, &g)| {
            secret
                .iter()
                .enumerate()
                .any(|(j, &s)| j != i && s == g)
        })
        .count();

    GuessResult { correct, misplaced }
}

/// Mastermind-style game with a single hidden row and unlimited attempts.
#[derive(Clone, Debug)]
pub struct DigitGame {
    secret: Digits,
    rounds: u32,
    last_result: Option<GuessResult>,
}

impl DigitGame {
    /// Create a game with a freshly generated secret.
    pub fn new(config: &DigitGameConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let secret = Digits::new(generate_digits(config.digit_count, rng)?);
        Ok(Self::from_secret(secret))
    }

    /// Create a game with a known secret.
    pub fn from_secret(secret: Digits) -> Self {
        Self {
            secret,
            rounds: 0,
            last_result: None,
        }
    }

    pub fn secret(&self) -> &Digits {
        &self.secret
    }

    pub fn digit_count(&self) -> usize {
        self.secret.len()
    }

    /// Completed rounds so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// True once a guess has matched every digit.
    pub fn has_won(&self) -> bool {
        self.last_result
            .is_some_and(|r| r.correct == self.secret.len())
    }

    /// Score one guess and count the round.
    ///
    /// # Panics
    ///
    /// Panics if the guess length differs from the secret.
    pub fn score_guess(&mut self, guess: &Digits) -> GuessResult {
        let result = score(&self.secret, guess);
        self.rounds += 1;
        self.last_result = Some(result);

        debug!(
            round = self.rounds,
            correct = result.correct,
            misplaced = result.misplaced,
            "guess scored"
        );
        if self.has_won() {
            info!(rounds = self.rounds, "digit game won");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Digits {
        s.parse().unwrap()
    }

    #[test]
    fn test_scores_example_from_rules() {
        let result = score(&d("3456"), &d("1736"));
        assert_eq!(result, GuessResult { correct: 1, misplaced: 1 });
    }

    #[test]
    fn test_misplaced_digits_are_not_consumed() {
        let result = score(&d("1123"), &d("1111"));
        assert_eq!(result, GuessResult { correct: 2, misplaced: 2 });
    }

    #[test]
    fn test_one_secret_digit_can_satisfy_many_guesses() {
        let result = score(&d("5000"), &d("0555"));
        // Each 5 finds the secret 5 at position 0; the 0 finds a secret 0 elsewhere
        assert_eq!(result, GuessResult { correct: 0, misplaced: 4 });
    }

    #[test]
    fn test_exact_guess_scores_all_correct() {
        let result = score(&d("9090"), &d("9090"));
        assert_eq!(result, GuessResult { correct: 4, misplaced: 0 });
    }

    #[test]
    fn test_no_shared_digits() {
        let result = score(&d("1234"), &d("5678"));
        assert_eq!(result, GuessResult::default());
    }

    #[test]
    #[should_panic(expected = "Guess length must match")]
    fn test_wrong_length_panics() {
        score(&d("1234"), &d("123"));
    }

    #[test]
    fn test_winning_guess_sets_has_won() {
        let mut game = DigitGame::from_secret(d("4821"));

        game.score_guess(&d("1111"));
        assert!(!game.has_won());

        let result = game.score_guess(&d("4821"));
        assert_eq!(result.correct, 4);
        assert!(game.has_won());
        assert_eq!(game.rounds(), 2);
    }

    #[test]
    fn test_rounds_count_every_guess() {
        let mut game = DigitGame::from_secret(d("0000"));

        for expected in 1..=5 {
            game.score_guess(&d("1234"));
            assert_eq!(game.rounds(), expected);
        }
    }

    #[test]
    fn test_new_game_generates_secret() {
        let mut rng = GameRng::new(42);
        let game = DigitGame::new(&DigitGameConfig::default(), &mut rng).unwrap();

        assert_eq!(game.digit_count(), 4);
        assert!(game.secret().iter().all(|d| d <= 9));
        assert_eq!(game.rounds(), 0);
        assert!(!game.has_won());
    }
}
