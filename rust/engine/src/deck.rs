use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::rng::RandomSource;
use crate::rules::is_forbidden_start;

/// The undealt draw pile.
///
/// When a draw finds the pile empty, a brand-new shuffled 96-card deck
/// replaces it. Discarded cards are never recycled, so the number of cards
/// in play grows over a long match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    replenishments: usize,
}

impl Deck {
    /// Full deck in construction order; no randomness involved.
    pub fn build() -> Self {
        Self::from_cards(full_deck())
    }

    /// Pile with exactly these cards, e.g. a rigged deck for a scenario.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            replenishments: 0,
        }
    }

    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle_cards(&mut self.cards);
    }

    /// Removes one uniformly chosen card, replenishing first if the pile is
    /// empty.
    pub fn draw_one<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Card {
        if self.is_empty() {
            self.replenish(rng);
        }
        let index = rng.pick_index(self.cards.len());
        self.cards.remove(index)
    }

    /// Removes `n` uniformly chosen cards without replacement. The empty-pile
    /// check runs before every single card, so one call may replenish
    /// midway.
    pub fn draw<R: RandomSource + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<Card> {
        (0..n).map(|_| self.draw_one(rng)).collect()
    }

    /// Samples random cards until one may open the discard stack and
    /// removes exactly that card.
    pub fn draw_initial_card<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Card, GameError> {
        if self.cards.iter().all(is_forbidden_start) {
            return Err(GameError::NoStartingCard);
        }
        loop {
            let index = rng.pick_index(self.cards.len());
            if !is_forbidden_start(&self.cards[index]) {
                return Ok(self.cards.remove(index));
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many times a fresh deck has replaced an empty pile.
    pub fn replenishments(&self) -> usize {
        self.replenishments
    }

    fn replenish<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        rng.shuffle_cards(&mut self.cards);
        self.replenishments += 1;
        debug!(
            replenishments = self.replenishments,
            "draw pile empty, replaced with a fresh deck"
        );
    }
}
