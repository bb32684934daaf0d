use crate::cards::{Card, Value, DECK_SIZE};
use crate::errors::ConfigError;

/// Seats at the table when nothing else is configured.
pub const DEFAULT_PLAYERS: usize = 4;
/// Cards dealt to each seat when nothing else is configured.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Table shape for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub player_count: usize,
    pub hand_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl MatchConfig {
    pub fn new(player_count: usize, hand_size: usize) -> Self {
        Self {
            player_count,
            hand_size,
        }
    }

    /// Checks the configuration before any dealing happens.
    ///
    /// The opening deal must fit in one deck after the starting card is
    /// taken, so replenishment never kicks in while hands are dealt.
    ///
    /// # Examples
    ///
    /// ```
    /// use unosim_engine::rules::MatchConfig;
    /// use unosim_engine::errors::ConfigError;
    ///
    /// assert!(MatchConfig::default().validate().is_ok());
    /// assert_eq!(
    ///     MatchConfig::new(1, 7).validate(),
    ///     Err(ConfigError::TooFewPlayers { players: 1 })
    /// );
    /// assert!(MatchConfig::new(10, 11).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers {
                players: self.player_count,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        let available = DECK_SIZE - 1;
        let needed = self.player_count.saturating_mul(self.hand_size);
        if needed > available {
            return Err(ConfigError::DealExceedsDeck { needed, available });
        }
        Ok(())
    }
}

/// Whether `card` may be played on top of `current`: same color, same
/// value, or a wild.
pub fn can_play(current: &Card, card: &Card) -> bool {
    current.color == card.color || current.value == card.value || card.value.is_wild()
}

/// Values that may never open the discard stack.
pub fn is_forbidden_start(card: &Card) -> bool {
    matches!(
        card.value,
        Value::DrawFour | Value::ColorChoice | Value::DrawTwo
    )
}

pub fn next_player_index(current: usize, player_count: usize) -> usize {
    (current + 1) % player_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Digit};

    #[test]
    fn matching_color_or_value_is_playable() {
        let top = Card::number(Color::Red, Digit::Five);
        assert!(can_play(&top, &Card::number(Color::Red, Digit::Nine)));
        assert!(can_play(&top, &Card::number(Color::Blue, Digit::Five)));
        assert!(!can_play(&top, &Card::number(Color::Blue, Digit::Six)));
        assert!(!can_play(&top, &Card::draw_two(Color::Green)));
    }

    #[test]
    fn draw_two_matches_draw_two() {
        let top = Card::draw_two(Color::Yellow);
        assert!(can_play(&top, &Card::draw_two(Color::Blue)));
    }

    #[test]
    fn wilds_are_always_playable() {
        let top = Card::draw_four().with_color(Color::Green);
        assert!(can_play(&top, &Card::color_choice()));
        assert!(can_play(&top, &Card::draw_four()));
    }

    #[test]
    fn special_cards_cannot_start() {
        assert!(is_forbidden_start(&Card::draw_four()));
        assert!(is_forbidden_start(&Card::color_choice()));
        assert!(is_forbidden_start(&Card::draw_two(Color::Red)));
        assert!(!is_forbidden_start(&Card::number(Color::Red, Digit::Zero)));
    }

    #[test]
    fn turn_wraps_around_the_table() {
        assert_eq!(next_player_index(0, 4), 1);
        assert_eq!(next_player_index(3, 4), 0);
        assert_eq!(next_player_index(1, 2), 0);
    }

    #[test]
    fn config_rejects_degenerate_tables() {
        assert_eq!(MatchConfig::new(4, 0).validate(), Err(ConfigError::EmptyHand));
        assert_eq!(
            MatchConfig::new(24, 4).validate(),
            Err(ConfigError::DealExceedsDeck {
                needed: 96,
                available: 95
            })
        );
        assert!(MatchConfig::new(2, 1).validate().is_ok());
        assert!(MatchConfig::new(95, 1).validate().is_ok());
        assert!(MatchConfig::new(96, 1).validate().is_err());
    }

    #[test]
    fn deal_bound_leaves_room_for_the_starting_card() {
        assert!(MatchConfig::new(5, 19).validate().is_ok());
        assert_eq!(
            MatchConfig::new(2, 53).validate(),
            Err(ConfigError::DealExceedsDeck {
                needed: 106,
                available: DECK_SIZE - 1
            })
        );
    }
}
