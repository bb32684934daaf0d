//! Replay command handler.
//!
//! Reads a saved trace and narrates it round by round: who acted, what was
//! played or drawn, penalties, color choices, hand sizes and standings.
//! Everything is reconstructed from consecutive snapshots.

use std::io::Write;

use unosim_engine::cards::{Card, Value};
use unosim_engine::logger::RoundRecord;

use crate::error::CliError;
use crate::formatters::{format_card, format_hand_sizes, format_standings};
use crate::io_utils::load_trace;
use crate::ui::{self, seat_label};

/// Handle the replay command.
///
/// # Returns
///
/// `Ok(())` on successful replay, `Err(CliError)` if the trace cannot be
/// read or parsed.
pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let records = load_trace(&input).map_err(CliError::InvalidInput)?;
    let Some(first) = records.first() else {
        writeln!(out, "No rounds found in trace.")?;
        return Ok(());
    };

    writeln!(
        out,
        "Starting card: {} | first to act: {}",
        format_card(&first.starting_card),
        seat_label(first.starting_player)
    )?;

    let mut previous: Option<&RoundRecord> = None;
    for rec in &records {
        for line in narrate_round(previous, rec) {
            writeln!(out, "{}", line)?;
        }
        previous = Some(rec);
    }

    if let Some(last) = records.last() {
        let winner = last.current_player_index;
        if last.player_hands.get(winner).is_some_and(|h| h.is_empty()) {
            writeln!(
                out,
                "{} has no more cards and has won after {} rounds!",
                seat_label(winner),
                records.len()
            )?;
        } else {
            ui::display_warning(err, "trace ends before any hand was emptied")?;
        }
    }
    Ok(())
}

/// Lines describing one round, given the snapshot before it.
pub fn narrate_round(previous: Option<&RoundRecord>, rec: &RoundRecord) -> Vec<String> {
    let actor = previous
        .map(|p| p.current_player_index)
        .unwrap_or(rec.starting_player);
    let prior_stack: &[Card] = match previous {
        Some(p) => p.game_stack.as_slice(),
        None => std::slice::from_ref(&rec.starting_card),
    };

    let mut lines = vec![format!("Round {}:", rec.round_number)];
    if rec.game_stack.len() > prior_stack.len() {
        let played = rec.current_card;
        let on = prior_stack
            .last()
            .map(format_card)
            .unwrap_or_else(|| "?".to_string());
        lines.push(format!(
            "  {} plays {} on {}",
            seat_label(actor),
            format_card(&played),
            on
        ));
        if let Some(penalty) = penalty_cards(&played.value) {
            let target = (actor + 1) % rec.player_hands.len().max(1);
            lines.push(format!(
                "  {} has to draw {} cards",
                seat_label(target),
                penalty
            ));
        }
        if played.is_wild() {
            lines.push(format!(
                "  {} chooses the color {}",
                seat_label(actor),
                played.color
            ));
        }
    } else {
        let drawn = rec
            .player_hands
            .get(actor)
            .and_then(|h| h.last())
            .map(format_card)
            .unwrap_or_else(|| "?".to_string());
        lines.push(format!("  {} must draw: {}", seat_label(actor), drawn));
    }

    lines.push(format!("  hands: {}", format_hand_sizes(&rec.player_hands)));
    lines.push(format!(
        "  standings: {}",
        format_standings(&rec.win_probabilities)
    ));
    lines
}

fn penalty_cards(value: &Value) -> Option<usize> {
    match value {
        Value::DrawTwo => Some(2),
        Value::DrawFour => Some(4),
        _ => None,
    }
}
