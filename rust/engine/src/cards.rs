use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CardParseError;

/// Card color. Wild cards carry [`Color::None`] until a color is assigned
/// to them on the discard stack.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    /// No color: an unassigned wild card
    #[default]
    #[serde(rename = "")]
    None,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::None => "",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blue" => Ok(Color::Blue),
            "Green" => Ok(Color::Green),
            "Red" => Ok(Color::Red),
            "Yellow" => Ok(Color::Yellow),
            "" => Ok(Color::None),
            other => Err(CardParseError::UnknownColor(other.to_string())),
        }
    }
}

/// Face digit of a number card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    pub fn from_u8(v: u8) -> Option<Digit> {
        match v {
            0 => Some(Digit::Zero),
            1 => Some(Digit::One),
            2 => Some(Digit::Two),
            3 => Some(Digit::Three),
            4 => Some(Digit::Four),
            5 => Some(Digit::Five),
            6 => Some(Digit::Six),
            7 => Some(Digit::Seven),
            8 => Some(Digit::Eight),
            9 => Some(Digit::Nine),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// What a card does. Serialized as the trace strings `"0"`..`"9"`,
/// `"Draw Two"`, `"Draw Four"` and `"Color Choice"`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Value {
    Number(Digit),
    /// Next player draws two cards
    DrawTwo,
    /// Wild; next player draws four cards
    DrawFour,
    /// Wild with no penalty
    ColorChoice,
}

impl Value {
    pub fn is_wild(&self) -> bool {
        matches!(self, Value::DrawFour | Value::ColorChoice)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(d) => write!(f, "{}", d.as_u8()),
            Value::DrawTwo => f.write_str("Draw Two"),
            Value::DrawFour => f.write_str("Draw Four"),
            Value::ColorChoice => f.write_str("Color Choice"),
        }
    }
}

impl FromStr for Value {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draw Two" => Ok(Value::DrawTwo),
            "Draw Four" => Ok(Value::DrawFour),
            "Color Choice" => Ok(Value::ColorChoice),
            digit => digit
                .parse::<u8>()
                .ok()
                .and_then(Digit::from_u8)
                .map(Value::Number)
                .ok_or_else(|| CardParseError::UnknownValue(digit.to_string())),
        }
    }
}

impl TryFrom<String> for Value {
    type Error = CardParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Value> for String {
    fn from(v: Value) -> Self {
        v.to_string()
    }
}

/// A single card. Immutable in hands and in the deck; only the color of a
/// wild on top of the discard stack is ever assigned.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Card {
    pub color: Color,
    pub value: Value,
}

impl Card {
    pub fn number(color: Color, digit: Digit) -> Card {
        Card {
            color,
            value: Value::Number(digit),
        }
    }

    pub fn draw_two(color: Color) -> Card {
        Card {
            color,
            value: Value::DrawTwo,
        }
    }

    pub fn draw_four() -> Card {
        Card {
            color: Color::None,
            value: Value::DrawFour,
        }
    }

    pub fn color_choice() -> Card {
        Card {
            color: Color::None,
            value: Value::ColorChoice,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.value.is_wild()
    }

    /// Copy of this card with its color replaced.
    #[must_use]
    pub fn with_color(self, color: Color) -> Card {
        Card { color, ..self }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::None => write!(f, "{}", self.value),
            c => write!(f, "{} - {}", c, self.value),
        }
    }
}

pub fn all_colors() -> [Color; 4] {
    [Color::Blue, Color::Green, Color::Red, Color::Yellow]
}

pub fn all_digits() -> [Digit; 10] {
    [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ]
}

/// Number of cards in a freshly built deck: two of each of the 11 colored
/// values in every color, plus four of each wild.
pub const DECK_SIZE: usize = 4 * 11 * 2 + 8;

/// Builds the 96-card composition in a fixed order: two copies of every
/// colored number and Draw Two, then four of each wild.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &color in &all_colors() {
        let colored = all_digits()
            .into_iter()
            .map(|d| Card::number(color, d))
            .chain(std::iter::once(Card::draw_two(color)));
        for card in colored {
            v.push(card);
            v.push(card);
        }
    }
    for _ in 0..4 {
        v.push(Card::color_choice());
        v.push(Card::draw_four());
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn full_deck_has_96_cards_with_expected_multiplicities() {
        let deck = full_deck();
        assert_eq!(DECK_SIZE, 96);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for c in &deck {
            *counts.entry(*c).or_default() += 1;
        }
        for color in all_colors() {
            for d in all_digits() {
                assert_eq!(counts[&Card::number(color, d)], 2);
            }
            assert_eq!(counts[&Card::draw_two(color)], 2);
        }
        assert_eq!(counts[&Card::color_choice()], 4);
        assert_eq!(counts[&Card::draw_four()], 4);
    }

    #[test]
    fn wilds_are_built_without_color() {
        assert!(full_deck()
            .iter()
            .filter(|c| c.is_wild())
            .all(|c| c.color == Color::None));
    }

    #[test]
    fn value_text_matches_trace_format() {
        assert_eq!(Value::Number(Digit::Seven).to_string(), "7");
        assert_eq!(Value::DrawTwo.to_string(), "Draw Two");
        assert_eq!("Color Choice".parse::<Value>(), Ok(Value::ColorChoice));
        assert_eq!("0".parse::<Value>(), Ok(Value::Number(Digit::Zero)));
        assert!("10".parse::<Value>().is_err());
        assert!("Skip".parse::<Value>().is_err());
    }

    #[test]
    fn card_serializes_with_pascal_case_fields() {
        let json = serde_json::to_string(&Card::number(Color::Red, Digit::Five)).unwrap();
        assert_eq!(json, r#"{"Color":"Red","Value":"5"}"#);

        let wild = serde_json::to_string(&Card::draw_four()).unwrap();
        assert_eq!(wild, r#"{"Color":"","Value":"Draw Four"}"#);
    }

    #[test]
    fn card_deserializes_from_trace_format() {
        let card: Card = serde_json::from_str(r#"{"Color":"Yellow","Value":"Draw Two"}"#).unwrap();
        assert_eq!(card, Card::draw_two(Color::Yellow));
        assert!(serde_json::from_str::<Card>(r#"{"Color":"Pink","Value":"1"}"#).is_err());
    }

    #[test]
    fn display_omits_missing_color() {
        assert_eq!(Card::number(Color::Blue, Digit::Three).to_string(), "Blue - 3");
        assert_eq!(Card::color_choice().to_string(), "Color Choice");
        assert_eq!(
            Card::draw_four().with_color(Color::Green).to_string(),
            "Green - Draw Four"
        );
    }
}
