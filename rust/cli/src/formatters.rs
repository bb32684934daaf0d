//! Card, hand, and standings formatters for terminal display.
//!
//! Cards render as short tokens: a color letter followed by the value
//! (`R7`, `G+2`), wilds as `+4` / `W` with the chosen color appended once
//! one has been assigned (`+4Y`).
//!
//! ## Example
//!
//! ```rust
//! use unosim_engine::cards::{Card, Color, Digit};
//! use unosim_cli::formatters::{format_card, format_hand};
//!
//! let seven = Card::number(Color::Red, Digit::Seven);
//! assert_eq!(format_card(&seven), "R7");
//! assert_eq!(format_hand(&[seven, Card::draw_four()]), "[R7 +4]");
//! ```

use unosim_engine::cards::{Card, Color, Value};

/// Single-letter color code; empty for colorless cards.
pub fn format_color(color: Color) -> &'static str {
    match color {
        Color::Blue => "B",
        Color::Green => "G",
        Color::Red => "R",
        Color::Yellow => "Y",
        Color::None => "",
    }
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(d) => d.as_u8().to_string(),
        Value::DrawTwo => "+2".to_string(),
        Value::DrawFour => "+4".to_string(),
        Value::ColorChoice => "W".to_string(),
    }
}

/// Short token for one card.
pub fn format_card(card: &Card) -> String {
    if card.is_wild() {
        format!("{}{}", format_value(&card.value), format_color(card.color))
    } else {
        format!("{}{}", format_color(card.color), format_value(&card.value))
    }
}

/// Space-separated card tokens in brackets.
pub fn format_hand(cards: &[Card]) -> String {
    let tokens: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", tokens.join(" "))
}

/// Hand sizes per seat, e.g. `P1=7 P2=6`.
pub fn format_hand_sizes(hands: &[Vec<Card>]) -> String {
    hands
        .iter()
        .enumerate()
        .map(|(i, h)| format!("P{}={}", i + 1, h.len()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_standings(standings: &[String]) -> String {
    standings.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use unosim_engine::cards::Digit;

    #[test]
    fn test_format_numbers_and_draw_two() {
        assert_eq!(format_card(&Card::number(Color::Blue, Digit::Zero)), "B0");
        assert_eq!(format_card(&Card::draw_two(Color::Green)), "G+2");
    }

    #[test]
    fn test_format_wilds_before_and_after_color() {
        assert_eq!(format_card(&Card::draw_four()), "+4");
        assert_eq!(format_card(&Card::color_choice()), "W");
        assert_eq!(
            format_card(&Card::color_choice().with_color(Color::Yellow)),
            "WY"
        );
    }

    #[test]
    fn test_format_empty_hand() {
        assert_eq!(format_hand(&[]), "[]");
    }

    #[test]
    fn test_format_hand_sizes() {
        let hands = vec![vec![Card::draw_four(); 2], Vec::new()];
        assert_eq!(format_hand_sizes(&hands), "P1=2 P2=0");
    }

    #[test]
    fn test_format_standings() {
        let s = vec!["Player 1: 50.00%".to_string(), "Player 2: 50.00%".to_string()];
        assert_eq!(format_standings(&s), "Player 1: 50.00% | Player 2: 50.00%");
    }
}
