//! Per-round standings.
//!
//! The reported "win probability" is each seat's share of all cards held,
//! so a bigger hand reports a bigger figure. Trace consumers rely on this
//! exact figure.

use crate::player::Hand;

/// Share of all held cards per seat, in percent.
pub fn hand_shares(hands: &[Hand]) -> Vec<f64> {
    let total: usize = hands.iter().map(Hand::len).sum();
    hands
        .iter()
        .map(|h| {
            if total == 0 {
                0.0
            } else {
                h.len() as f64 / total as f64 * 100.0
            }
        })
        .collect()
}

/// Standings formatted as `"Player {n}: {share:.2}%"`, seats numbered from 1.
pub fn estimate(hands: &[Hand]) -> Vec<String> {
    hand_shares(hands)
        .into_iter()
        .enumerate()
        .map(|(i, share)| format!("Player {}: {:.2}%", i + 1, share))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hand_of(n: usize) -> Hand {
        Hand::from_cards(vec![Card::color_choice(); n])
    }

    #[test]
    fn larger_hand_reports_larger_share() {
        let hands = [hand_of(1), hand_of(3)];
        assert_eq!(estimate(&hands), vec!["Player 1: 25.00%", "Player 2: 75.00%"]);
    }

    #[test]
    fn shares_round_to_two_decimals() {
        let hands = [hand_of(1), hand_of(1), hand_of(1)];
        assert_eq!(
            estimate(&hands),
            vec!["Player 1: 33.33%", "Player 2: 33.33%", "Player 3: 33.33%"]
        );
    }

    #[test]
    fn empty_hand_reports_zero() {
        let hands = [hand_of(0), hand_of(5)];
        assert_eq!(estimate(&hands), vec!["Player 1: 0.00%", "Player 2: 100.00%"]);
    }

    #[test]
    fn no_cards_at_all_reports_zero_everywhere() {
        let hands = [hand_of(0), hand_of(0)];
        assert_eq!(hand_shares(&hands), vec![0.0, 0.0]);
    }
}
