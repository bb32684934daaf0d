//! Consistency checks for recorded round traces.
//!
//! A trace produced by the engine satisfies every check below. Anything
//! edited by hand or truncated is reported round by round, so one broken
//! record does not hide the rest.

use unosim_engine::cards::Card;
use unosim_engine::logger::RoundRecord;

use crate::error::BatchValidationError;

/// Violation tied to a 1-based round number (0 for the trace as a whole).
pub type TraceError = BatchValidationError<u64>;

/// Checks a whole trace and returns every violation found.
///
/// # Example
///
/// ```rust
/// use unosim_engine::rules::MatchConfig;
/// use unosim_cli::validation::validate_trace;
///
/// let trace = unosim_engine::run_match_with_seed(MatchConfig::new(3, 4), Some(1)).unwrap();
/// assert!(validate_trace(&trace).is_empty());
/// ```
pub fn validate_trace(records: &[RoundRecord]) -> Vec<TraceError> {
    let mut errors = Vec::new();
    let Some((first, _)) = records.split_first() else {
        errors.push(TraceError {
            item_context: 0,
            message: "trace holds no rounds".to_string(),
        });
        return errors;
    };

    let mut previous: Option<&RoundRecord> = None;
    for (i, rec) in records.iter().enumerate() {
        let round = i as u64 + 1;
        let mut fail = |message: String| {
            errors.push(TraceError {
                item_context: round,
                message,
            })
        };

        if rec.round_number != round {
            fail(format!(
                "round number {} out of sequence, expected {}",
                rec.round_number, round
            ));
        }
        if rec.starting_player != first.starting_player {
            fail(format!(
                "starting player changed from {} to {}",
                first.starting_player, rec.starting_player
            ));
        }
        if rec.starting_card != first.starting_card {
            fail(format!(
                "starting card changed from {} to {}",
                first.starting_card, rec.starting_card
            ));
        }

        let seats = rec.player_hands.len();
        if seats < 2 {
            fail(format!("{} seats recorded, at least 2 required", seats));
        }
        if rec.current_player_index >= seats {
            fail(format!(
                "current player {} is not seated ({} seats)",
                rec.current_player_index, seats
            ));
        }
        if rec.win_probabilities.len() != seats {
            fail(format!(
                "{} standings for {} seats",
                rec.win_probabilities.len(),
                seats
            ));
        }
        check_actions(rec, &mut fail);
        check_stack(rec, previous, &mut fail);

        let emptied: Vec<usize> = rec
            .player_hands
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_empty())
            .map(|(seat, _)| seat)
            .collect();
        let is_last = i + 1 == records.len();
        match (is_last, emptied.as_slice()) {
            (false, []) => {}
            (false, _) => fail("match continues after a hand was emptied".to_string()),
            (true, [winner]) if *winner == rec.current_player_index => {}
            (true, [winner]) => fail(format!(
                "winner is seat {} but current player is {}",
                winner, rec.current_player_index
            )),
            (true, []) => fail("trace ends without an emptied hand".to_string()),
            (true, _) => fail(format!("{} hands emptied at once", emptied.len())),
        }

        previous = Some(rec);
    }
    errors
}

fn check_actions(rec: &RoundRecord, fail: &mut impl FnMut(String)) {
    if rec.actions.len() != rec.player_hands.len() {
        fail(format!(
            "{} actions for {} seats",
            rec.actions.len(),
            rec.player_hands.len()
        ));
        return;
    }
    for (seat, (action, hand)) in rec.actions.iter().zip(&rec.player_hands).enumerate() {
        if action.player_index != seat {
            fail(format!(
                "action {} names seat {}",
                seat, action.player_index
            ));
        }
        if action.card != hand.last().copied() {
            fail(format!("action card of seat {} is not its last card", seat));
        }
    }
}

fn check_stack(rec: &RoundRecord, previous: Option<&RoundRecord>, fail: &mut impl FnMut(String)) {
    let Some(top) = rec.game_stack.last() else {
        fail("discard stack is empty".to_string());
        return;
    };
    if *top != rec.current_card {
        fail(format!(
            "current card {} is not the top of the stack {}",
            rec.current_card, top
        ));
    }
    if rec.game_stack.first() != Some(&rec.starting_card) {
        fail("discard stack does not open with the starting card".to_string());
    }
    let Some(prev) = previous else {
        return;
    };
    let before: &[Card] = &prev.game_stack;
    if rec.game_stack.len() < before.len() {
        fail(format!(
            "discard stack shrank from {} to {} cards",
            before.len(),
            rec.game_stack.len()
        ));
    } else if rec.game_stack.len() > before.len() + 1 {
        fail(format!(
            "discard stack grew by {} cards in one round",
            rec.game_stack.len() - before.len()
        ));
    } else if &rec.game_stack[..before.len()] != before {
        fail("earlier discard stack entries were altered".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unosim_engine::rules::MatchConfig;
    use unosim_engine::run_match_with_seed;

    fn trace() -> Vec<RoundRecord> {
        run_match_with_seed(MatchConfig::new(3, 3), Some(21)).unwrap()
    }

    fn messages(errors: &[TraceError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn engine_trace_passes() {
        for seed in 0..16 {
            let t = run_match_with_seed(MatchConfig::default(), Some(seed)).unwrap();
            assert!(validate_trace(&t).is_empty(), "seed {seed}");
        }
    }

    #[test]
    fn empty_trace_is_rejected() {
        let errors = validate_trace(&[]);
        assert_eq!(messages(&errors), vec!["0: trace holds no rounds"]);
    }

    #[test]
    fn renumbered_round_is_reported() {
        let mut t = trace();
        t[0].round_number = 5;
        let errors = validate_trace(&t);
        assert!(
            errors
                .iter()
                .any(|e| e.item_context == 1 && e.message.contains("out of sequence"))
        );
    }

    #[test]
    fn truncated_trace_has_no_winner() {
        let mut t = trace();
        if t.len() < 2 {
            return;
        }
        t.pop();
        let errors = validate_trace(&t);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "trace ends without an emptied hand");
    }

    #[test]
    fn altered_history_is_reported() {
        let mut t = trace();
        let last = t.len() - 1;
        t[last].game_stack[0] = Card::draw_four();
        let errors = validate_trace(&t);
        assert!(!errors.is_empty());
        assert!(errors.iter().all(|e| e.item_context == last as u64 + 1));
    }

    #[test]
    fn wrong_winner_seat_is_reported() {
        let mut t = trace();
        let last = t.last_mut().unwrap();
        let seats = last.player_hands.len();
        last.current_player_index = (last.current_player_index + 1) % seats;
        let errors = validate_trace(&t);
        assert!(errors.iter().any(|e| e.message.starts_with("winner is seat")));
    }
}
