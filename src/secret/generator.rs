use tracing::debug;

use crate::core::{ConfigError, GameRng, Result, ALPHABET};

/// Generate `count` symbols where every drawn letter appears in pairs.
///
/// Draws `count / 2` letters independently (they may repeat), duplicates
/// each one, then shuffles the whole sequence.
///
/// ```
/// use guessing_games::core::GameRng;
/// use guessing_games::secret::generate_pair_symbols;
///
/// let mut rng = GameRng::new(42);
/// let symbols = generate_pair_symbols(20, &mut rng).unwrap();
/// assert_eq!(symbols.len(), 20);
///
/// assert!(generate_pair_symbols(7, &mut rng).is_err());
/// ```
pub fn generate_pair_symbols(count: usize, rng: &mut GameRng) -> Result<Vec<char>> {
    if count == 0 {
        return Err(ConfigError::EmptyBoard);
    }
    if count % 2 != 0 {
        return Err(ConfigError::OddBoxCount(count));
    }

    let mut symbols = Vec::with_capacity(count);
    for _ in 0..count / 2 {
        let symbol = *rng.choose(&ALPHABET).expect("alphabet is non-empty");
        symbols.push(symbol);
        symbols.push(symbol);
    }
    rng.shuffle(&mut symbols);

    debug!(count, seed = rng.seed(), "generated pair symbols");
    Ok(symbols)
}

/// Generate `count` independent uniform digits in `0..=9`, repeats allowed.
pub fn generate_digits(count: usize, rng: &mut GameRng) -> Result<Vec<u8>> {
    if count == 0 {
        return Err(ConfigError::NoDigits);
    }

    let digits = (0..count).map(|_| rng.gen_digit()).collect();

    debug!(count, seed = rng.seed(), "generated secret digits");
    Ok(digits)
}
