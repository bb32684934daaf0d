//! Deal command handler.
//!
//! Performs the opening deal only and prints the table: starting card,
//! every hand, the starting seat and what is left in the draw pile.

use std::io::Write;

use unosim_engine::engine::Engine;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use crate::ui;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_deal_command(Some(2), Some(7), Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    players: Option<usize>,
    hand_size: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let engine = Engine::new(cfg.match_config(players, hand_size), seed.or(cfg.seed))?;

    writeln!(out, "Seed: {}", engine.seed())?;
    writeln!(out, "Starting card: {}", format_card(&engine.starting_card()))?;
    for (i, hand) in engine.hands().iter().enumerate() {
        writeln!(out, "{}: {}", ui::seat_label(i), format_hand(hand.cards()))?;
    }
    writeln!(
        out,
        "Starting player: {}",
        ui::seat_label(engine.starting_player())
    )?;
    writeln!(out, "Deck: {} cards remaining", engine.deck().remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(players: usize, hand_size: usize, seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(players), Some(hand_size), Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_command_output_format() {
        let output = deal(3, 7, 999);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Seed: 999");
        assert!(lines[1].starts_with("Starting card: "));
        assert!(lines[2].starts_with("Player 1: ["));
        assert!(lines[4].starts_with("Player 3: ["));
        assert!(lines[5].starts_with("Starting player: Player "));
        // 96 - 1 starting card - 21 dealt
        assert_eq!(lines[6], "Deck: 74 cards remaining");
    }

    #[test]
    fn test_deal_command_deterministic() {
        assert_eq!(deal(4, 7, 12345), deal(4, 7, 12345));
    }

    #[test]
    fn test_deal_hands_have_requested_size() {
        let output = deal(2, 4, 3);
        for line in output.lines().filter(|l| l.starts_with("Player ") && l.contains('[')) {
            let inner = line.split_once('[').unwrap().1.trim_end_matches(']');
            assert_eq!(inner.split(' ').count(), 4, "{line}");
        }
    }

    #[test]
    fn test_deal_rejects_oversized_table() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(20), Some(7), Some(1), &mut out);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
