//! Randomness providers for the match.
//!
//! Every random choice in a match (shuffles, draw positions, starting seat,
//! random wild colors) goes through a single [`RandomSource`] owned by the
//! [`Engine`](crate::engine::Engine). [`GameRng`] is the seeded production
//! source; [`ScriptedSource`] replays fixed indices for rigged scenarios.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_colors, Card, Color};

pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass `upper == 0`.
    fn pick_index(&mut self, upper: usize) -> usize;

    /// Uniform permutation of `cards` (Fisher-Yates over [`Self::pick_index`]).
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        for i in (1..cards.len()).rev() {
            let j = self.pick_index(i + 1);
            cards.swap(i, j);
        }
    }

    /// Uniform choice among the four real colors.
    fn pick_color(&mut self) -> Color {
        let colors = all_colors();
        colors[self.pick_index(colors.len())]
    }
}

/// Seeded ChaCha20 source. Same seed, same match.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha20Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the thread-local generator; the chosen seed stays readable
    /// through [`GameRng::seed`] so the match can be reproduced.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.inner.random_range(0..upper)
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.inner);
    }
}

/// Deterministic source that hands out queued values (reduced modulo the
/// requested bound). Once the queue is exhausted it always answers
/// `upper - 1`, which makes shuffles the identity and draws take the last
/// card of the pile.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> Self {
        Self {
            queue: values.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: usize) {
        self.queue.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, upper: usize) -> usize {
        match self.queue.pop_front() {
            Some(v) => v % upper,
            None => upper - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::full_deck;

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<usize> = (0..20).map(|_| a.pick_index(1000)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick_index(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        let xs: Vec<usize> = (0..20).map(|_| a.pick_index(1000)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick_index(1000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut rng = GameRng::new(7);
        for upper in 1..50 {
            assert!(rng.pick_index(upper) < upper);
        }
    }

    #[test]
    fn scripted_source_replays_then_takes_last() {
        let mut s = ScriptedSource::new([3, 9]);
        assert_eq!(s.pick_index(5), 3);
        assert_eq!(s.pick_index(5), 4);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.pick_index(5), 4);
    }

    #[test]
    fn pushed_values_extend_the_script() {
        let mut s = ScriptedSource::new([1]);
        s.push(2);
        s.push(0);
        assert_eq!(s.remaining(), 3);
        let picks: Vec<usize> = (0..3).map(|_| s.pick_index(3)).collect();
        assert_eq!(picks, vec![1, 2, 0]);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn exhausted_scripted_shuffle_is_identity() {
        let mut s = ScriptedSource::default();
        let mut cards = full_deck();
        s.shuffle_cards(&mut cards);
        assert_eq!(cards, full_deck());
    }

    #[test]
    fn pick_color_never_returns_none() {
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            assert_ne!(rng.pick_color(), Color::None);
        }
        let mut s = ScriptedSource::new([0, 1, 2, 3]);
        let picked: Vec<Color> = (0..4).map(|_| s.pick_color()).collect();
        assert_eq!(picked, all_colors());
    }
}
