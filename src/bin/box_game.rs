//! Pair-matching box game on the console.

use std::io;

use anyhow::Result;
use guessing_games::core::{init_logging, rng_from_env, PairGameConfig};
use guessing_games::games::pairs::PairGame;
use guessing_games::session::{ConsolePrompter, PairSession};

fn main() -> Result<()> {
    init_logging();

    let config = PairGameConfig::default();
    let mut rng = rng_from_env()?;
    let game = PairGame::new(&config, &mut rng)?;

    let prompter = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    PairSession::new(game, prompter, io::stdout())
        .with_row_width(config.row_width)
        .run()?;

    Ok(())
}
