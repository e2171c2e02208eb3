//! Engine plus flip-back timer, driven by a front end's event loop.

use std::time::Instant;

use log::trace;

use crate::core::{CardId, GameId, GameSnapshot, MemoryConfig, MemoryResult};
use crate::rules::GameEngine;
use crate::selection::Resolution;

use super::scheduler::FlipBackTimer;

/// What a front end holds on to for the lifetime of the screen.
#[derive(Clone, Debug)]
pub struct Session {
    engine: GameEngine,
    timer: FlipBackTimer,
}

impl Session {
    /// Create a session and deal the first game.
    pub fn new(config: MemoryConfig) -> MemoryResult<Self> {
        Ok(Self::from_engine(GameEngine::new(config)?))
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            timer: FlipBackTimer::new(),
        }
    }

    /// Forward a tap at time `now`.
    ///
    /// A mismatch arms the flip-back timer.
    pub fn tap(&mut self, id: CardId, now: Instant) -> Resolution {
        let outcome = self.engine.select(id);
        if let Some(ticket) = outcome.flip_back {
            trace!("flip-back for {} epoch {} armed", ticket.game, ticket.epoch);
            self.timer.arm(now, ticket);
        }
        outcome.resolution
    }

    /// Run the flip-back if it is due. Returns true if cards were turned over.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer.take_due(now) {
            Some(ticket) => self.engine.resolve_flip_back(&ticket),
            None => false,
        }
    }

    /// Deal a new game, cancelling any pending flip-back.
    pub fn new_game(&mut self) -> GameId {
        if let Some(ticket) = self.timer.cancel() {
            trace!("cancelled flip-back for {}", ticket.game);
        }
        self.engine.new_game()
    }

    /// When the next flip-back is due, if one is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.engine.progress()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
