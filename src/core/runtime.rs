//! Process startup shared by the game binaries.

use tracing::info;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, Result};
use super::rng::GameRng;

/// Environment variable that fixes the RNG seed.
pub const SEED_ENV: &str = "GUESSING_GAMES_SEED";

/// Install the log subscriber.
///
/// Logs go to stderr so they never interleave with the game on stdout.
/// Verbosity comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the session RNG from an optional seed value.
///
/// `None` draws a seed from OS entropy.
pub fn rng_from_seed(seed: Option<&str>) -> Result<GameRng> {
    let rng = match seed {
        Some(raw) => {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidSeed)?;
            GameRng::new(seed)
        }
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "session rng ready");
    Ok(rng)
}

/// Build the session RNG from [`SEED_ENV`].
pub fn rng_from_env() -> Result<GameRng> {
    let seed = std::env::var(SEED_ENV).ok();
    rng_from_seed(seed.as_deref())
}
