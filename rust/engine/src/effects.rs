//! Effect dispatch for played cards.
//!
//! [`resolve_effect`] is a pure function of the table: it says *what* the
//! played card does (who draws, how many, how the wild gets its color) and
//! leaves the randomness and mutation to the engine.

use crate::cards::{Card, Color, Value};
use crate::errors::GameError;
use crate::player::Hand;
use crate::rules::next_player_index;

/// Forced draw for the seat after the one that played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Penalty {
    pub target: usize,
    pub cards: usize,
}

/// How the wild on top of the stack gets its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPick {
    /// Taken from the first card left in the player's hand
    Inferred(Color),
    /// Drawn uniformly from the four colors
    Random,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectResult {
    pub penalty: Option<Penalty>,
    pub color: Option<ColorPick>,
}

impl EffectResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.penalty.is_none() && self.color.is_none()
    }
}

/// Resolves the effect of `played`, which the player at `active` has just
/// moved from their hand onto `stack`.
///
/// `stack` already ends with `played`; the card below it is the previous
/// top. A penalty always targets the next seat, who still acts next round.
pub fn resolve_effect(
    played: &Card,
    stack: &[Card],
    hands: &[Hand],
    active: usize,
) -> EffectResult {
    let next = next_player_index(active, hands.len());
    match played.value {
        Value::Number(_) => EffectResult::none(),
        Value::DrawTwo => EffectResult {
            penalty: Some(Penalty {
                target: next,
                cards: 2,
            }),
            color: None,
        },
        Value::DrawFour => EffectResult {
            penalty: Some(Penalty {
                target: next,
                cards: 4,
            }),
            color: Some(wild_color(stack, hands.get(active))),
        },
        Value::ColorChoice => EffectResult {
            penalty: None,
            color: Some(wild_color(stack, hands.get(active))),
        },
    }
}

/// A wild laid on a non-wild takes the color of the player's first
/// remaining card; a wild laid on another wild gets a random color. When
/// no color can be read off the hand the pick is random as well.
fn wild_color(stack: &[Card], hand: Option<&Hand>) -> ColorPick {
    let previous = stack.len().checked_sub(2).and_then(|i| stack.get(i));
    if previous.is_some_and(Card::is_wild) {
        return ColorPick::Random;
    }
    match hand.map(infer_color) {
        Some(Ok(color)) => ColorPick::Inferred(color),
        _ => ColorPick::Random,
    }
}

/// Color of the first card in `hand`.
///
/// Fails with [`GameError::NoColorSource`] when the hand is empty or opens
/// with a colorless wild.
pub fn infer_color(hand: &Hand) -> Result<Color, GameError> {
    match hand.first() {
        Some(card) if card.color != Color::None => Ok(card.color),
        _ => Err(GameError::NoColorSource),
    }
}
