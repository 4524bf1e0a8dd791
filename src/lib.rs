//! Single-player Blackjack against a dealer playing fixed house rules.
//!
//! The game runs over any line-oriented console: the `blackjack` binary
//! wires it to stdin/stdout, and [`play_scripted_game`] replays a session
//! from recorded answers for a browser host.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod sim;
pub mod strategy;

pub use config::GameConfig;
pub use console::Console;
pub use deck::{describe, Card, Deck, Rank, Suit};
pub use error::{DeckError, GameError};
pub use game::{BlackjackGame, Phase};
pub use hand::Hand;
pub use result::{Outcome, RoundResult};
pub use strategy::{Action, Policy};

#[wasm_bindgen]
pub fn play_scripted_game(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: sim::ScriptedInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let result = sim::run_scripted(input)
        .map_err(|err| JsValue::from_str(&format!("Game failed: {err}")))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}
