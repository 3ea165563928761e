//! genome-quest console game.
//!
//! Reads `characters.txt`, `random_events.txt` and `riddles.txt` from the
//! working directory and plays a two-player game on stdin/stdout.
//! `RUST_LOG` controls diagnostics (stderr); `GENOME_QUEST_SEED` fixes the
//! seed.

use tracing_subscriber::EnvFilter;

use genome_quest::{ConsoleTerminal, GameConfig, GameError, GameSession};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env();
    let mut session = GameSession::load(config);
    let mut terminal = ConsoleTerminal::stdio();

    match session.run(&mut terminal) {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            tracing::info!(seed = session.seed(), "input closed, leaving game");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
