use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::GameError, hand::BLACKJACK};

fn default_num_packs() -> u8 {
    4
}

fn default_dealer_stands_on() -> u8 {
    17
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default = "default_num_packs")]
    pub num_packs: u8,
    #[serde(default = "default_dealer_stands_on")]
    pub dealer_stands_on: u8,
    /// Rebuild the deck at round start once fewer cards than this remain.
    /// Zero means only when it is empty.
    #[serde(default)]
    pub reshuffle_below: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            num_packs: default_num_packs(),
            dealer_stands_on: default_dealer_stands_on(),
            reshuffle_below: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        self.validate_for_shoe(self.num_packs as usize * crate::deck::PACK_SIZE)
    }

    /// Checks the rules against a shoe of `shoe_size` cards, which is what
    /// every rebuild of the dealing deck produces.
    pub fn validate_for_shoe(&self, shoe_size: usize) -> Result<(), GameError> {
        let reason = if self.num_packs == 0 {
            Some("num_packs must be at least 1".to_string())
        } else if !(2..=BLACKJACK).contains(&self.dealer_stands_on) {
            Some(format!(
                "dealer_stands_on must be between 2 and {BLACKJACK}, got {}",
                self.dealer_stands_on
            ))
        } else if self.reshuffle_below > shoe_size {
            Some(format!(
                "reshuffle_below ({}) exceeds the shoe of {shoe_size} cards",
                self.reshuffle_below
            ))
        } else {
            None
        };
        match reason {
            Some(reason) => {
                warn!(target: "config", %reason, "rejected game config");
                Err(GameError::InvalidConfig(reason))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_house_rules() {
        let config = GameConfig::default();
        assert_eq!(config.num_packs, 4);
        assert_eq!(config.dealer_stands_on, 17);
        assert_eq!(config.reshuffle_below, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 11}"#).unwrap();
        assert_eq!(config.num_packs, 4);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn zero_packs_is_rejected() {
        let config = GameConfig {
            num_packs: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn dealer_threshold_above_21_is_rejected() {
        let config = GameConfig {
            dealer_stands_on: 22,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reserve_larger_than_shoe_is_rejected() {
        let config = GameConfig {
            num_packs: 1,
            reshuffle_below: 53,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
