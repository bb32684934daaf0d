use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::Hand;

/// Trailing card of one seat at the end of a round.
///
/// This is the last card in the seat's hand, not the card that seat played.
/// An empty hand has no trailing card and is written as a blank card
/// (`{"Color":"","Value":""}`).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoundAction {
    pub player_index: usize,
    #[serde(with = "blank_card")]
    pub card: Option<Card>,
}

/// Snapshot of the match after one round. Records own deep copies of the
/// hands and the stack, so later rounds never alter earlier records.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoundRecord {
    /// 1-based round counter
    pub round_number: u64,
    /// Seat that opened the match (constant across the match)
    pub starting_player: usize,
    /// Card that opened the discard stack (constant across the match)
    pub starting_card: Card,
    /// Every seat's hand after the round's action
    pub player_hands: Vec<Vec<Card>>,
    pub actions: Vec<RoundAction>,
    /// Seat to act next; the winner's seat once the match is over
    pub current_player_index: usize,
    /// Top of the discard stack
    pub current_card: Card,
    /// Discard stack from the starting card up to the top
    pub game_stack: Vec<Card>,
    pub win_probabilities: Vec<String>,
}

/// Captures one round.
///
/// # Errors
///
/// [`GameError::EmptyStack`] if `stack` holds no card.
pub fn record(
    round_number: u64,
    starting_player: usize,
    starting_card: Card,
    hands: &[Hand],
    next_player: usize,
    stack: &[Card],
    win_probabilities: Vec<String>,
) -> Result<RoundRecord, GameError> {
    let current_card = *stack.last().ok_or(GameError::EmptyStack)?;
    let actions = hands
        .iter()
        .enumerate()
        .map(|(i, h)| RoundAction {
            player_index: i,
            card: h.last().copied(),
        })
        .collect();
    Ok(RoundRecord {
        round_number,
        starting_player,
        starting_card,
        player_hands: hands.iter().map(|h| h.cards().to_vec()).collect(),
        actions,
        current_player_index: next_player,
        current_card,
        game_stack: stack.to_vec(),
        win_probabilities,
    })
}

/// Append-only list of round snapshots for one match.
#[derive(Debug, Clone, Default)]
pub struct RoundRecorder {
    records: Vec<RoundRecord>,
}

impl RoundRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<RoundRecord> {
        self.records
    }
}

mod blank_card {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::cards::{Card, Color, Value};

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct RawCard {
        color: String,
        value: String,
    }

    pub fn serialize<S: Serializer>(card: &Option<Card>, s: S) -> Result<S::Ok, S::Error> {
        match card {
            Some(c) => c.serialize(s),
            None => RawCard {
                color: String::new(),
                value: String::new(),
            }
            .serialize(s),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Card>, D::Error> {
        let raw = RawCard::deserialize(d)?;
        if raw.value.is_empty() {
            return Ok(None);
        }
        let color: Color = raw.color.parse().map_err(D::Error::custom)?;
        let value: Value = raw.value.parse().map_err(D::Error::custom)?;
        Ok(Some(Card { color, value }))
    }
}
