use std::io::Cursor;

use serde::{Deserialize, Serialize};

use crate::{
    config::GameConfig,
    console::Console,
    error::GameError,
    game::BlackjackGame,
    result::RoundResult,
};

/// A whole session played from pre-recorded answers, one per prompt.
#[derive(Debug, Deserialize)]
pub struct ScriptedInput {
    #[serde(default)]
    pub config: GameConfig,
    #[serde(default)]
    pub inputs: Vec<String>,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub rounds: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
}

impl SessionSummary {
    pub fn tally(rounds: &[RoundResult]) -> Self {
        let mut summary = SessionSummary::default();
        for round in rounds {
            summary.rounds += 1;
            if round.outcome.is_tie() {
                summary.ties += 1;
            } else if round.outcome.player_won() {
                summary.player_wins += 1;
            } else {
                summary.dealer_wins += 1;
            }
        }
        summary
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedOutput {
    pub transcript: String,
    pub rounds: Vec<RoundResult>,
    pub summary: SessionSummary,
}

/// Runs a session against an in-memory console. Once the answers run out
/// every prompt reads as empty, so the session always ends.
pub fn run_scripted(input: ScriptedInput) -> Result<ScriptedOutput, GameError> {
    let mut script = input.inputs.join("\n");
    script.push('\n');
    let console = Console::new(Cursor::new(script), Vec::new());
    let mut game = BlackjackGame::new(&input.config, console)?;
    let rounds = game.play()?;
    let transcript = String::from_utf8_lossy(&game.into_console().into_output()).into_owned();
    let summary = SessionSummary::tally(&rounds);
    Ok(ScriptedOutput {
        transcript,
        rounds,
        summary,
    })
}
