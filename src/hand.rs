use crate::deck::Card;

pub const BLACKJACK: u8 = 21;

/// Cards held by one seat at the table, with a running total kept in step
/// with every card added.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
    value: u8,
    soft_ace: bool,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value = self.value.saturating_add(card.value());
        if card.is_ace() {
            self.soft_ace = true;
        }
        self.adjust();
    }

    // Each downgrade rescans the whole hand: the flag comes back on while any
    // ace is held, not only while an ace is still counted as 11.
    fn adjust(&mut self) {
        while self.value > BLACKJACK && self.soft_ace {
            self.value -= 10;
            self.soft_ace = self.cards.iter().any(Card::is_ace);
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn has_soft_ace(&self) -> bool {
        self.soft_ace
    }

    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.value = 0;
        self.soft_ace = false;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Space-separated cards, optionally masking the first one.
    pub fn render(&self, hide_first: bool) -> String {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if hide_first && i == 0 {
                    "[hidden]".to_string()
                } else {
                    card.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
