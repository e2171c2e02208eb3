//! Read-only views of a game for renderers.
//!
//! A `GameSnapshot` is taken after every mutation and handed to whatever
//! draws the table. It shares structure with the live state (`im::Vector`),
//! so taking one is O(1), and later mutations never show through.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{CardId, GameId};
use crate::cards::Card;
use crate::selection::PAIR_SIZE;

/// Immutable copy of a game's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game this snapshot was taken from.
    pub game: GameId,

    /// Cards in table order.
    pub cards: Vector<Card>,

    /// Cards awaiting resolution, oldest first.
    pub pending: SmallVec<[CardId; PAIR_SIZE]>,

    /// Pairs found so far.
    pub matched_pairs: usize,

    /// Pairs on the table.
    pub total_pairs: usize,
}

impl GameSnapshot {
    /// Fraction of pairs matched, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        self.matched_pairs as f64 / self.total_pairs as f64
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.matched_pairs == self.total_pairs
    }

    /// Find a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Card at a table position.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }
}
