use serde::Serialize;

use crate::{deck::Card, hand::Hand};

/// How a round ended, from the player's side of the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    TieBothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Tie,
}

impl Outcome {
    /// Blackjacks are checked before busts, busts before totals.
    pub fn determine(player: &Hand, dealer: &Hand) -> Outcome {
        match (player.has_blackjack(), dealer.has_blackjack()) {
            (true, true) => return Outcome::TieBothBlackjack,
            (true, false) => return Outcome::PlayerBlackjack,
            (false, true) => return Outcome::DealerBlackjack,
            (false, false) => {}
        }
        if player.is_bust() {
            Outcome::PlayerBust
        } else if dealer.is_bust() {
            Outcome::DealerBust
        } else if player.value() > dealer.value() {
            Outcome::PlayerWins
        } else if dealer.value() > player.value() {
            Outcome::DealerWins
        } else {
            Outcome::Tie
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::TieBothBlackjack => "Tie! Both have Blackjack!",
            Outcome::PlayerBlackjack => "Player wins! Blackjack!",
            Outcome::DealerBlackjack => "Dealer wins! Blackjack!",
            Outcome::PlayerBust => "Bust! Dealer wins.",
            Outcome::DealerBust => "Dealer busts! Player wins.",
            Outcome::PlayerWins => "Player wins!",
            Outcome::DealerWins => "Dealer wins!",
            Outcome::Tie => "Tie!",
        }
    }

    pub fn player_won(&self) -> bool {
        matches!(
            self,
            Outcome::PlayerBlackjack | Outcome::DealerBust | Outcome::PlayerWins
        )
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::TieBothBlackjack | Outcome::Tie)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round: u32,
    pub outcome: Outcome,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_value: u8,
    pub dealer_value: u8,
}

impl RoundResult {
    pub fn new(round: u32, outcome: Outcome, player: &Hand, dealer: &Hand) -> Self {
        RoundResult {
            round,
            outcome,
            player_cards: player.cards().to_vec(),
            dealer_cards: dealer.cards().to_vec(),
            player_value: player.value(),
            dealer_value: dealer.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Clubs, rank));
        }
        hand
    }

    #[test]
    fn player_blackjack_beats_dealer_seventeen() {
        let player = hand_of(&[Rank::Ace, Rank::King]);
        let dealer = hand_of(&[Rank::Nine, Rank::Eight]);
        assert_eq!(Outcome::determine(&player, &dealer), Outcome::PlayerBlackjack);
    }

    #[test]
    fn blackjack_beats_three_card_twenty_one() {
        let player = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let dealer = hand_of(&[Rank::Queen, Rank::Ace]);
        assert_eq!(Outcome::determine(&player, &dealer), Outcome::DealerBlackjack);
    }

    #[test]
    fn both_blackjack_ties() {
        let player = hand_of(&[Rank::Ace, Rank::Jack]);
        let dealer = hand_of(&[Rank::Ten, Rank::Ace]);
        let outcome = Outcome::determine(&player, &dealer);
        assert_eq!(outcome, Outcome::TieBothBlackjack);
        assert!(outcome.is_tie());
    }

    #[test]
    fn player_bust_loses_to_dealer_nineteen() {
        let player = hand_of(&[Rank::King, Rank::Five, Rank::Seven]);
        let dealer = hand_of(&[Rank::Ten, Rank::Nine]);
        assert_eq!(player.value(), 22);
        assert_eq!(Outcome::determine(&player, &dealer), Outcome::PlayerBust);
    }

    #[test]
    fn player_bust_is_checked_before_dealer_bust() {
        let player = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
        let dealer = hand_of(&[Rank::King, Rank::Six, Rank::Nine]);
        assert_eq!(Outcome::determine(&player, &dealer), Outcome::PlayerBust);
    }

    #[test]
    fn dealer_bust_pays_player() {
        let player = hand_of(&[Rank::Ten, Rank::Two]);
        let dealer = hand_of(&[Rank::King, Rank::Six, Rank::Nine]);
        let outcome = Outcome::determine(&player, &dealer);
        assert_eq!(outcome, Outcome::DealerBust);
        assert!(outcome.player_won());
    }

    #[test]
    fn higher_total_wins_and_equal_ties() {
        let eighteen = hand_of(&[Rank::Ten, Rank::Eight]);
        let nineteen = hand_of(&[Rank::Ten, Rank::Nine]);
        assert_eq!(Outcome::determine(&nineteen, &eighteen), Outcome::PlayerWins);
        assert_eq!(Outcome::determine(&eighteen, &nineteen), Outcome::DealerWins);
        assert_eq!(Outcome::determine(&eighteen, &eighteen.clone()), Outcome::Tie);
    }

    #[test]
    fn round_result_snapshots_both_hands() {
        let player = hand_of(&[Rank::Ten, Rank::Nine]);
        let dealer = hand_of(&[Rank::Ten, Rank::Seven]);
        let result = RoundResult::new(3, Outcome::PlayerWins, &player, &dealer);
        assert_eq!(result.round, 3);
        assert_eq!(result.player_value, 19);
        assert_eq!(result.dealer_value, 17);
        assert_eq!(result.dealer_cards.len(), 2);
    }
}
