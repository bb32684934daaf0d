use tracing::{debug, info};

use crate::cards::{Card, Color};
use crate::deck::Deck;
use crate::effects::{resolve_effect, ColorPick, EffectResult};
use crate::errors::{ConfigError, GameError};
use crate::logger::{record, RoundRecord, RoundRecorder};
use crate::player::Hand;
use crate::probability::estimate;
use crate::rng::{GameRng, RandomSource};
use crate::rules::{next_player_index, MatchConfig};

/// Where the match stands between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    PlayerTurn(usize),
    GameOver { winner: usize },
}

/// What the acting seat did in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Card moved onto the stack (wilds as played, before color assignment)
    Played(Card),
    /// No playable card; this card was drawn instead
    Drew(Card),
}

/// Result of a single [`Engine::play_round`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub round: u64,
    pub player: usize,
    pub action: TurnAction,
    pub effect: EffectResult,
    /// Color given to a played wild
    pub assigned_color: Option<Color>,
    pub state: MatchState,
}

/// Owns the live match: draw pile, hands, discard stack, turn pointer and
/// the randomness source. Records receive copies only.
///
/// # Examples
///
/// ```
/// use unosim_engine::engine::{Engine, MatchState};
/// use unosim_engine::rules::MatchConfig;
///
/// let engine = Engine::new(MatchConfig::default(), Some(12345)).unwrap();
/// assert_eq!(engine.hands().len(), 4);
/// assert!(engine.hands().iter().all(|h| h.len() == 7));
/// assert!(matches!(engine.state(), MatchState::PlayerTurn(_)));
///
/// let rounds = engine.run().unwrap();
/// let last = rounds.last().unwrap();
/// assert!(last.player_hands[last.current_player_index].is_empty());
/// ```
#[derive(Debug)]
pub struct Engine<R: RandomSource = GameRng> {
    config: MatchConfig,
    rng: R,
    deck: Deck,
    hands: Vec<Hand>,
    stack: Vec<Card>,
    starting_player: usize,
    starting_card: Card,
    state: MatchState,
    round: u64,
    recorder: RoundRecorder,
}

impl Engine<GameRng> {
    /// Deals a match from a seeded ChaCha20 source, or a random seed when
    /// `seed` is `None`.
    pub fn new(config: MatchConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::deal(config, rng)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Engine<R> {
    /// Shuffles a fresh deck, turns up the starting card, deals every seat
    /// and picks the starting seat at random.
    pub fn deal(config: MatchConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let mut deck = Deck::build();
        deck.shuffle(&mut rng);
        let starting_card = deck.draw_initial_card(&mut rng)?;
        let hands = (0..config.player_count)
            .map(|_| Hand::from_cards(deck.draw(config.hand_size, &mut rng)))
            .collect();
        let starting_player = rng.pick_index(config.player_count);

        info!(
            players = config.player_count,
            hand_size = config.hand_size,
            starting_card = %starting_card,
            starting_player = starting_player + 1,
            "match dealt"
        );
        Ok(Self::assemble(
            config,
            rng,
            deck,
            hands,
            starting_card,
            starting_player,
        ))
    }

    /// Starts a match from an explicit table, skipping the random deal.
    pub fn from_parts(
        deck: Deck,
        hands: Vec<Hand>,
        starting_card: Card,
        starting_player: usize,
        rng: R,
    ) -> Result<Self, GameError> {
        let player_count = hands.len();
        if player_count < 2 {
            return Err(ConfigError::TooFewPlayers {
                players: player_count,
            }
            .into());
        }
        if starting_player >= player_count {
            return Err(ConfigError::UnknownSeat {
                player: starting_player,
                players: player_count,
            }
            .into());
        }
        let hand_size = hands.iter().map(Hand::len).max().unwrap_or(0);
        let config = MatchConfig::new(player_count, hand_size);
        Ok(Self::assemble(
            config,
            rng,
            deck,
            hands,
            starting_card,
            starting_player,
        ))
    }

    fn assemble(
        config: MatchConfig,
        rng: R,
        deck: Deck,
        hands: Vec<Hand>,
        starting_card: Card,
        starting_player: usize,
    ) -> Self {
        Self {
            config,
            rng,
            deck,
            hands,
            stack: vec![starting_card],
            starting_player,
            starting_card,
            state: MatchState::PlayerTurn(starting_player),
            round: 0,
            recorder: RoundRecorder::new(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stack(&self) -> &[Card] {
        &self.stack
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.stack.last()
    }

    pub fn starting_player(&self) -> usize {
        self.starting_player
    }

    pub fn starting_card(&self) -> Card {
        self.starting_card
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn records(&self) -> &[RoundRecord] {
        self.recorder.records()
    }

    pub fn winner(&self) -> Option<usize> {
        match self.state {
            MatchState::GameOver { winner } => Some(winner),
            MatchState::PlayerTurn(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Resolves one round for the seat whose turn it is and appends its
    /// record.
    ///
    /// The first card in hand order that fits the top of the stack is
    /// played; with no such card the seat draws one. Either way the turn
    /// then passes to the next seat unless the acting seat emptied its hand.
    ///
    /// # Errors
    ///
    /// [`GameError::MatchOver`] once a winner exists.
    pub fn play_round(&mut self) -> Result<TurnOutcome, GameError> {
        let active = match self.state {
            MatchState::PlayerTurn(p) => p,
            MatchState::GameOver { winner } => return Err(GameError::MatchOver { winner }),
        };
        let top = *self.stack.last().ok_or(GameError::EmptyStack)?;

        let played = self.hands[active]
            .first_playable(&top)
            .and_then(|i| self.hands[active].take(i));

        let (action, effect, assigned_color) = match played {
            Some(card) => {
                debug!(player = active + 1, card = %card, on = %top, "plays a card");
                self.stack.push(card);
                let effect = resolve_effect(&card, &self.stack, &self.hands, active);
                let color = self.apply_effect(active, &effect)?;
                (TurnAction::Played(card), effect, color)
            }
            None => {
                let card = self.deck.draw_one(&mut self.rng);
                debug!(player = active + 1, card = %card, "must draw");
                self.hands[active].push(card);
                (TurnAction::Drew(card), EffectResult::none(), None)
            }
        };

        let next = if self.hands[active].is_empty() {
            info!(player = active + 1, round = self.round + 1, "hand emptied, match won");
            self.state = MatchState::GameOver { winner: active };
            active
        } else {
            let next = next_player_index(active, self.hands.len());
            self.state = MatchState::PlayerTurn(next);
            next
        };

        self.round += 1;
        let rec = record(
            self.round,
            self.starting_player,
            self.starting_card,
            &self.hands,
            next,
            &self.stack,
            estimate(&self.hands),
        )?;
        self.recorder.push(rec);

        Ok(TurnOutcome {
            round: self.round,
            player: active,
            action,
            effect,
            assigned_color,
            state: self.state,
        })
    }

    /// Plays rounds until a seat empties its hand and hands back the trace.
    pub fn run(mut self) -> Result<Vec<RoundRecord>, GameError> {
        while !self.is_over() {
            self.play_round()?;
        }
        Ok(self.recorder.into_records())
    }

    fn apply_effect(
        &mut self,
        active: usize,
        effect: &EffectResult,
    ) -> Result<Option<Color>, GameError> {
        if let Some(penalty) = effect.penalty {
            let drawn = self.deck.draw(penalty.cards, &mut self.rng);
            debug!(
                player = penalty.target + 1,
                cards = penalty.cards,
                "has to draw"
            );
            self.hands[penalty.target].extend(drawn);
        }
        let Some(pick) = effect.color else {
            return Ok(None);
        };
        let color = match pick {
            ColorPick::Inferred(color) => color,
            ColorPick::Random => self.rng.pick_color(),
        };
        let top = self.stack.last_mut().ok_or(GameError::EmptyStack)?;
        *top = top.with_color(color);
        debug!(player = active + 1, color = %color, "chooses the color");
        Ok(Some(color))
    }
}
