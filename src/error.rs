use std::fmt;
use std::io;

/// Failure to take a card from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// No cards remain.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "deck is empty"),
        }
    }
}

impl std::error::Error for DeckError {}

#[derive(Debug)]
pub enum GameError {
    Deck(DeckError),
    Io(io::Error),
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Deck(err) => write!(f, "dealing failed: {err}"),
            GameError::Io(err) => write!(f, "console i/o failed: {err}"),
            GameError::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Deck(err) => Some(err),
            GameError::Io(err) => Some(err),
            GameError::InvalidConfig(_) => None,
        }
    }
}

impl From<DeckError> for GameError {
    fn from(err: DeckError) -> Self {
        GameError::Deck(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn deck_error_is_the_source_of_game_error() {
        let err = GameError::from(DeckError::Empty);
        assert_eq!(err.to_string(), "dealing failed: deck is empty");
        assert!(err.source().is_some());
    }

    #[test]
    fn config_error_has_no_source() {
        let err = GameError::InvalidConfig("num_packs must be at least 1".to_string());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("num_packs"));
    }
}
