use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    config::GameConfig,
    console::Console,
    deck::Deck,
    error::GameError,
    hand::Hand,
    result::{Outcome, RoundResult},
    strategy::{wants_another_round, Action, Policy},
};

/// Where a session stands between two steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    NewRound,
    InitialDeal,
    PlayerTurn,
    DealerTurn,
    Showdown,
    AskContinue,
    Terminated,
}

pub struct BlackjackGame<R, W> {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    player_policy: Policy,
    dealer_policy: Policy,
    reshuffle_below: usize,
    console: Console<R, W>,
    round: u32,
    results: Vec<RoundResult>,
}

impl<R: BufRead, W: Write> BlackjackGame<R, W> {
    pub fn new(config: &GameConfig, console: Console<R, W>) -> Result<Self, GameError> {
        config.validate()?;
        let deck = Deck::new(config.num_packs, config.seed);
        Self::with_deck(deck, config, console)
    }

    /// Starts from a prepared deck. Rebuilds keep the deck's own pack count,
    /// so the reshuffle reserve is checked against that deck.
    pub fn with_deck(
        deck: Deck,
        config: &GameConfig,
        console: Console<R, W>,
    ) -> Result<Self, GameError> {
        config.validate_for_shoe(deck.full_size())?;
        Ok(BlackjackGame {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            player_policy: Policy::Player,
            dealer_policy: Policy::dealer(config.dealer_stands_on),
            reshuffle_below: config.reshuffle_below,
            console,
            round: 0,
            results: Vec::new(),
        })
    }

    /// Plays rounds until the player declines another one and returns what
    /// happened in each of them.
    pub fn play(&mut self) -> Result<Vec<RoundResult>, GameError> {
        let mut phase = Phase::NewRound;
        while phase != Phase::Terminated {
            phase = self.step(phase)?;
        }
        self.console.say("Game over.")?;
        Ok(std::mem::take(&mut self.results))
    }

    fn step(&mut self, phase: Phase) -> Result<Phase, GameError> {
        debug!(target: "round", round = self.round, ?phase, "step");
        let next = match phase {
            Phase::NewRound => {
                self.start_new_round()?;
                Phase::InitialDeal
            }
            Phase::InitialDeal => {
                self.deal_initial_cards()?;
                Phase::PlayerTurn
            }
            Phase::PlayerTurn => {
                self.player_turn()?;
                if self.player.is_bust() {
                    self.finish_round(Outcome::PlayerBust);
                    Phase::AskContinue
                } else {
                    Phase::DealerTurn
                }
            }
            Phase::DealerTurn => {
                self.dealer_turn()?;
                Phase::Showdown
            }
            Phase::Showdown => {
                self.showdown()?;
                Phase::AskContinue
            }
            Phase::AskContinue => {
                let answer = self.console.prompt("Play again? (y/n): ")?;
                self.player.clear();
                self.dealer.clear();
                if wants_another_round(&answer) {
                    Phase::NewRound
                } else {
                    Phase::Terminated
                }
            }
            Phase::Terminated => Phase::Terminated,
        };
        Ok(next)
    }

    fn start_new_round(&mut self) -> Result<(), GameError> {
        if self.deck.is_empty() || self.deck.remaining_cards() < self.reshuffle_below {
            self.console.say("Shuffling the deck...")?;
            self.deck.rebuild();
        }
        self.round += 1;
        info!(target: "round", round = self.round, cards_left = self.deck.remaining_cards(), "round started");
        Ok(())
    }

    fn deal_initial_cards(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            self.player.add_card(self.deck.deal_card()?);
            self.dealer.add_card(self.deck.deal_card()?);
        }
        self.console
            .say(format!("Dealer's cards: {}", self.dealer.render(true)))?;
        self.console
            .say(format!("Player's cards: {}", self.player.render(false)))?;
        Ok(())
    }

    fn player_turn(&mut self) -> Result<(), GameError> {
        while !self.player.is_bust() {
            let action = match self.player_policy.decide(&self.player) {
                Some(action) => action,
                None => Action::from_code(&self.console.prompt("Hit (h) or Stand (s)? ")?),
            };
            if action == Action::Stand {
                break;
            }
            let card = self.deck.deal_card()?;
            self.player.add_card(card);
            self.console.say(format!("Player draws: {card}"))?;
            self.console
                .say(format!("Player's cards: {}", self.player.render(false)))?;
            self.console
                .say(format!("Player's points: {}", self.player.value()))?;
            if self.player.is_bust() {
                self.console.say(Outcome::PlayerBust.message())?;
            }
        }
        Ok(())
    }

    fn dealer_turn(&mut self) -> Result<(), GameError> {
        self.console.say("Dealer's turn:")?;
        while self.dealer_policy.should_hit(&self.dealer) {
            let card = self.deck.deal_card()?;
            self.dealer.add_card(card);
            self.console.say(format!("Dealer draws: {card}"))?;
            self.console
                .say(format!("Dealer's cards: {}", self.dealer.render(false)))?;
            self.console
                .say(format!("Dealer's points: {}", self.dealer.value()))?;
        }
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let outcome = Outcome::determine(&self.player, &self.dealer);
        self.console.say("Final result:")?;
        self.console
            .say(format!("Player's cards: {}", self.player.render(false)))?;
        self.console
            .say(format!("Player's points: {}", self.player.value()))?;
        self.console
            .say(format!("Dealer's cards: {}", self.dealer.render(false)))?;
        self.console
            .say(format!("Dealer's points: {}", self.dealer.value()))?;
        self.console.say(outcome.message())?;
        self.finish_round(outcome);
        Ok(())
    }

    fn finish_round(&mut self, outcome: Outcome) {
        info!(
            target: "round",
            round = self.round,
            ?outcome,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round finished"
        );
        self.results
            .push(RoundResult::new(self.round, outcome, &self.player, &self.dealer));
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
