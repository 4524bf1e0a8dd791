use std::io;
use std::process::ExitCode;

use console_blackjack::{BlackjackGame, Console, GameConfig, GameError};
use tracing::error;

fn run() -> Result<(), GameError> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut game = BlackjackGame::new(&GameConfig::default(), console)?;
    game.play()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "blackjack", %err, "game aborted");
            ExitCode::FAILURE
        }
    }
}
