use thiserror::Error;

/// Rejected match configuration. Raised before any card is dealt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least 2 players are required, got {players}")]
    TooFewPlayers { players: usize },
    #[error("Hand size must be at least 1")]
    EmptyHand,
    #[error(
        "Dealing {needed} cards exceeds the {available} cards available after the starting card"
    )]
    DealExceedsDeck { needed: usize, available: usize },
    #[error("Starting player {player} is not seated (players: {players})")]
    UnknownSeat { player: usize, players: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no card available to infer color")]
    NoColorSource,
    #[error("Deck holds no card that may start the discard stack")]
    NoStartingCard,
    #[error("Discard stack is empty")]
    EmptyStack,
    #[error("Match already won by player {}", winner + 1)]
    MatchOver { winner: usize },
}

/// Failure to read a card back from its textual form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Unknown card color: {0:?}")]
    UnknownColor(String),
    #[error("Unknown card value: {0:?}")]
    UnknownValue(String),
}
