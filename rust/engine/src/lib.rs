//! # unosim-engine: UNO-style Match Simulation Core
//!
//! Simulates a multi-seat UNO-style card game from the opening deal to the
//! first emptied hand, producing an auditable trace of one snapshot per
//! round. All randomness flows through one injectable source, so a seeded
//! match is fully reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card vocabulary (Color, Value, Card) and deck composition
//! - [`rng`] - Randomness providers (seeded ChaCha20, scripted)
//! - [`deck`] - Draw pile with shuffling, random draws and replenishment
//! - [`player`] - Hands and the first-playable scan
//! - [`rules`] - Card legality, turn order and match configuration
//! - [`effects`] - Special-card effect dispatch
//! - [`engine`] - Dealing and the turn resolution state machine
//! - [`probability`] - Per-round hand-share standings
//! - [`logger`] - RoundRecord snapshots and the round recorder
//! - [`errors`] - Error types for configuration and play
//!
//! ## Quick Start
//!
//! ```rust
//! let rounds = unosim_engine::run_match(4, 7).unwrap();
//! let last = rounds.last().unwrap();
//! assert!(last.player_hands[last.current_player_index].is_empty());
//! ```
//!
//! ## Deterministic Matches
//!
//! ```rust
//! use unosim_engine::rules::MatchConfig;
//! use unosim_engine::run_match_with_seed;
//!
//! let a = run_match_with_seed(MatchConfig::default(), Some(42)).unwrap();
//! let b = run_match_with_seed(MatchConfig::default(), Some(42)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod player;
pub mod probability;
pub mod rng;
pub mod rules;

use crate::engine::Engine;
use crate::errors::GameError;
use crate::logger::RoundRecord;
use crate::rules::MatchConfig;

/// Plays one match with a randomly seeded source and returns its trace.
///
/// # Errors
///
/// [`GameError::Config`] when the table shape is invalid.
pub fn run_match(player_count: usize, hand_size: usize) -> Result<Vec<RoundRecord>, GameError> {
    run_match_with_seed(MatchConfig::new(player_count, hand_size), None)
}

/// Plays one match; the same `seed` always yields the same trace.
pub fn run_match_with_seed(
    config: MatchConfig,
    seed: Option<u64>,
) -> Result<Vec<RoundRecord>, GameError> {
    Engine::new(config, seed)?.run()
}
