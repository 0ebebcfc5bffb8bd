//! Digit-feedback guess game on the console.

use std::io;

use anyhow::Result;
use guessing_games::core::{init_logging, rng_from_env, DigitGameConfig};
use guessing_games::games::digits::DigitGame;
use guessing_games::session::{ConsolePrompter, DigitSession};

fn main() -> Result<()> {
    init_logging();

    let mut rng = rng_from_env()?;
    let game = DigitGame::new(&DigitGameConfig::default(), &mut rng)?;

    let prompter = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    DigitSession::new(game, prompter, io::stdout()).run()?;

    Ok(())
}
