use serde::Serialize;

use crate::hand::Hand;

pub const HIT_TOKEN: &str = "h";
pub const CONTINUE_TOKEN: &str = "y";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    /// Only the exact hit token hits; anything else, including an empty
    /// line, stands.
    pub fn from_code(code: &str) -> Action {
        if code.trim() == HIT_TOKEN {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// Whether the answer to the replay prompt asks for another round.
pub fn wants_another_round(answer: &str) -> bool {
    answer.trim() == CONTINUE_TOKEN
}

/// Who decides between hit and stand for a hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Policy {
    /// The person at the console decides.
    Player,
    /// House rule: hit while the total is below `stands_on`. Soft and hard
    /// totals are treated alike.
    Dealer { stands_on: u8 },
}

impl Policy {
    pub fn dealer(stands_on: u8) -> Self {
        Policy::Dealer { stands_on }
    }

    /// The fixed decision for this hand, or `None` when the choice belongs
    /// to the player. A busted hand never draws.
    pub fn decide(&self, hand: &Hand) -> Option<Action> {
        if hand.is_bust() {
            return Some(Action::Stand);
        }
        match *self {
            Policy::Player => None,
            Policy::Dealer { stands_on } => {
                if hand.value() < stands_on {
                    Some(Action::Hit)
                } else {
                    Some(Action::Stand)
                }
            }
        }
    }

    pub fn should_hit(&self, hand: &Hand) -> bool {
        self.decide(hand) == Some(Action::Hit)
    }
}
