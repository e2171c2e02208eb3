//! The game engine: owns the current game and deals new ones.
//!
//! `GameEngine` is what a presentation layer talks to:
//! - `new_game` replaces the current `GameState` wholesale
//! - `select` forwards a tap and reports what happened
//! - `resolve_flip_back` runs a deferred flip-back, if it still applies
//!
//! ## Deferred flip-backs
//!
//! A mismatched pair stays face-up until the presentation layer calls back
//! after a short delay. `select` hands out a `FlipBack` ticket naming the
//! game and pair it was issued for. If a new game was dealt, or the pair
//! was already resolved some other way, the ticket is stale and resolving
//! it does nothing.

use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{
    CardId, GameId, GameRng, GameRngState, GameSnapshot, GameState, IdAllocator, MemoryConfig,
    MemoryResult,
};
use crate::selection::Resolution;

/// Ticket for a delayed flip-back of one mismatched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipBack {
    /// Game the pair belongs to.
    pub game: GameId,
    /// Pair epoch at the time of the mismatch.
    pub epoch: u64,
    /// How long to leave both faces showing.
    pub delay: Duration,
}

/// Result of forwarding a tap to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOutcome {
    pub resolution: Resolution,
    /// Set when a mismatched pair is showing and should be flipped back later.
    pub flip_back: Option<FlipBack>,
}

/// Memory game engine.
///
/// ## Example
///
/// ```
/// use memory_match::core::MemoryConfig;
/// use memory_match::rules::GameEngine;
///
/// let mut engine = GameEngine::new(MemoryConfig::default().with_seed(7)).unwrap();
/// assert_eq!(engine.cards().len(), 12);
///
/// let first = engine.cards()[0].id;
/// let outcome = engine.select(first);
/// assert!(outcome.flip_back.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: MemoryConfig,
    rng: GameRng,
    ids: IdAllocator,
    state: GameState,
}

impl GameEngine {
    /// Create an engine and deal the first game.
    ///
    /// Uses the config's seed, or OS entropy if none is set.
    pub fn new(config: MemoryConfig) -> MemoryResult<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine drawing shuffles from `rng`.
    pub fn with_rng(config: MemoryConfig, mut rng: GameRng) -> MemoryResult<Self> {
        config.validate()?;

        let mut ids = IdAllocator::new();
        let mut deal_rng = rng.fork();
        let state = GameState::deal_validated(&config.contents, &mut deal_rng, &mut ids);
        info!(
            "dealt {} with {} pairs (seed {})",
            state.id(),
            state.total_pair_count(),
            rng.seed()
        );

        Ok(Self {
            config,
            rng,
            ids,
            state,
        })
    }

    /// Discard the current game and deal a fresh one.
    ///
    /// Outstanding `FlipBack` tickets become stale.
    pub fn new_game(&mut self) -> GameId {
        let mut deal_rng = self.rng.fork();
        self.state = GameState::deal_validated(&self.config.contents, &mut deal_rng, &mut self.ids);
        info!(
            "dealt {} with {} pairs",
            self.state.id(),
            self.state.total_pair_count()
        );
        self.state.id()
    }

    /// Forward a tap on a card.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        let resolution = self.state.select(id);
        let flip_back = resolution.needs_flip_back().then(|| FlipBack {
            game: self.state.id(),
            epoch: self.state.pair_epoch(),
            delay: self.config.flip_back_delay(),
        });
        SelectOutcome {
            resolution,
            flip_back,
        }
    }

    /// Flip back the current mismatched pair, if there is one.
    pub fn clear_unmatched_selections(&mut self) -> bool {
        self.state.clear_unmatched_selections()
    }

    /// Does this ticket still refer to the pair currently showing?
    #[must_use]
    pub fn is_current(&self, ticket: &FlipBack) -> bool {
        ticket.game == self.state.id() && ticket.epoch == self.state.pair_epoch()
    }

    /// Run a deferred flip-back.
    ///
    /// No-op (returns false) if the ticket is from an earlier game or an
    /// earlier pair of this game.
    pub fn resolve_flip_back(&mut self, ticket: &FlipBack) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "dropping stale flip-back for {} epoch {} (current {} epoch {})",
                ticket.game,
                ticket.epoch,
                self.state.id(),
                self.state.pair_epoch()
            );
            return false;
        }
        self.state.clear_unmatched_selections()
    }

    // === Queries ===

    /// Fraction of pairs matched in the current game.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Cards of the current game, in table order.
    #[must_use]
    pub fn cards(&self) -> &im::Vector<Card> {
        self.state.cards()
    }

    /// The current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Identity of the current game.
    #[must_use]
    pub fn game_id(&self) -> GameId {
        self.state.id()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// RNG state, enough to reproduce every future deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
