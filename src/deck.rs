use std::fmt;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::error::DeckError;

pub const PACK_SIZE: usize = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
            Suit::Spades => '\u{2660}',
        }
    }
}

/// Card rank. Discriminants are the rank numbers 2 through 14, ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// Point value with the ace counted soft (11).
    pub fn value(&self) -> u8 {
        match self.rank {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            rank => rank.number(),
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// The dealing deck. The top of the deck is the end of `cards`.
pub struct Deck {
    pub num_packs: u8,
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    /// Builds `num_packs` full packs and shuffles them. Without a seed the
    /// generator is seeded from OS entropy.
    pub fn new(num_packs: u8, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut deck = Deck {
            num_packs,
            cards: Vec::with_capacity(num_packs as usize * PACK_SIZE),
            rng,
        };
        deck.rebuild();
        deck
    }

    /// Throws away whatever is left and replaces it with a fresh, shuffled
    /// set of full packs.
    pub fn rebuild(&mut self) {
        self.cards.clear();
        for _ in 0..self.num_packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
        self.cards.shuffle(&mut self.rng);
        debug!(target: "deck", packs = self.num_packs, cards = self.cards.len(), "deck rebuilt");
    }

    /// Replaces the remaining cards with `cards`, dealt in the given order.
    /// A later `rebuild` still produces full packs.
    pub fn stacked(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self.cards.reverse();
        self
    }

    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn full_size(&self) -> usize {
        self.num_packs as usize * PACK_SIZE
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Lists the remaining cards from the top down, followed by the count.
pub fn describe(deck: &Deck) -> String {
    let listing = deck
        .cards()
        .iter()
        .rev()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Deck contents: {listing}\nCards remaining: {}", deck.remaining_cards())
}
