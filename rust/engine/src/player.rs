use crate::cards::Card;
use crate::rules::can_play;
use serde::{Deserialize, Serialize};

/// Ordered cards held by one seat. Serialized as a plain card array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Position of the first card, in hand order, that may go on `top`.
    pub fn first_playable(&self, top: &Card) -> Option<usize> {
        self.cards.iter().position(|c| can_play(top, c))
    }

    /// Removes the card at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Digit};

    fn hand() -> Hand {
        Hand::from_cards(vec![
            Card::number(Color::Blue, Digit::One),
            Card::number(Color::Red, Digit::Two),
            Card::color_choice(),
            Card::number(Color::Red, Digit::Three),
        ])
    }

    #[test]
    fn first_playable_follows_hand_order() {
        let top = Card::number(Color::Red, Digit::Nine);
        assert_eq!(hand().first_playable(&top), Some(1));

        let top = Card::number(Color::Green, Digit::Nine);
        assert_eq!(hand().first_playable(&top), Some(2));
    }

    #[test]
    fn first_playable_none_without_match() {
        let h = Hand::from_cards(vec![Card::number(Color::Blue, Digit::One)]);
        assert_eq!(h.first_playable(&Card::number(Color::Red, Digit::Two)), None);
    }

    #[test]
    fn take_preserves_remaining_order() {
        let mut h = hand();
        assert_eq!(h.take(1), Some(Card::number(Color::Red, Digit::Two)));
        assert_eq!(h.len(), 3);
        assert_eq!(h.first(), Some(&Card::number(Color::Blue, Digit::One)));
        assert_eq!(h.last(), Some(&Card::number(Color::Red, Digit::Three)));
        assert_eq!(h.take(10), None);
    }

    #[test]
    fn drawn_cards_are_appended() {
        let mut h = Hand::new();
        assert!(h.is_empty());
        h.push(Card::draw_four());
        h.extend([Card::draw_two(Color::Green)]);
        assert_eq!(h.cards(), &[Card::draw_four(), Card::draw_two(Color::Green)]);
    }
}
