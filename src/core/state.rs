//! Game state: one dealt deck and its selection bookkeeping.
//!
//! ## Lifecycle
//!
//! A `GameState` is dealt fresh for every game, mutated in place by
//! selections, and replaced wholesale on reset. Nothing from an old
//! instance survives into the next one: cards get new ids, the
//! id-to-position map is rebuilt, and the `GameId` changes.
//!
//! ## Card lifecycle
//!
//! ```text
//! FaceDown -> FaceUp -> Matched   (terminal)
//!                   \-> FaceDown  (flip-back or eviction)
//! ```
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::ContentId;
//! use memory_match::core::{GameRng, GameState, IdAllocator};
//!
//! let contents: Vec<ContentId> = ["a", "b"].into_iter().map(ContentId::from).collect();
//! let state = GameState::deal(&contents, &mut GameRng::new(42), &mut IdAllocator::new()).unwrap();
//!
//! assert_eq!(state.cards().len(), 4);
//! assert_eq!(state.total_pair_count(), 2);
//! assert_eq!(state.progress(), 0.0);
//! ```

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::config::validate_contents;
use super::entity::{CardId, GameId, IdAllocator};
use super::error::MemoryResult;
use super::rng::GameRng;
use super::snapshot::GameSnapshot;
use crate::cards::{Card, ContentId};
use crate::selection::{Resolution, SelectionQueue, PAIR_SIZE};

/// One dealt game.
///
/// Cards are held in an `im::Vector` so snapshots for renderers are O(1).
#[derive(Clone, Debug)]
pub struct GameState {
    /// Identity of this deal.
    id: GameId,

    /// Cards in table order (shuffled once at deal time).
    cards: Vector<Card>,

    /// Card id to table position. Rebuilt on every deal.
    positions: FxHashMap<CardId, usize>,

    /// Face-up, unmatched cards awaiting resolution.
    selection: SelectionQueue,

    /// Incremented every time a mismatched pair is formed.
    pair_epoch: u64,
}

impl GameState {
    /// Deal a new game: two face-down cards per content id, shuffled.
    ///
    /// An empty content set deals an empty table. A content id that
    /// appears more than once is rejected.
    pub fn deal(
        contents: &[ContentId],
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> MemoryResult<Self> {
        validate_contents(contents)?;
        Ok(Self::deal_validated(contents, rng, ids))
    }

    /// Deal from a content set already checked by `validate_contents`.
    pub(crate) fn deal_validated(
        contents: &[ContentId],
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> Self {
        let id = ids.next_game();

        let mut deck: Vec<Card> = Vec::with_capacity(contents.len() * PAIR_SIZE);
        for content in contents {
            for _ in 0..PAIR_SIZE {
                deck.push(Card::new(ids.next_card(), content.clone()));
            }
        }
        rng.shuffle(&mut deck);

        let positions = deck
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id, position))
            .collect();

        Self {
            id,
            cards: deck.into_iter().collect(),
            positions,
            selection: SelectionQueue::new(),
            pair_epoch: 0,
        }
    }

    // === Queries ===

    /// Identity of this deal.
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// All cards in table order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|position| &self.cards[position])
    }

    /// Table position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Ids of the cards awaiting resolution, oldest first.
    #[must_use]
    pub fn pending(&self) -> SmallVec<[CardId; PAIR_SIZE]> {
        self.selection.iter().map(|position| self.cards[position].id).collect()
    }

    /// Number of cards awaiting resolution.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.selection.len()
    }

    /// Counter bumped whenever a mismatched pair is formed.
    ///
    /// Deferred flip-backs remember the epoch they were issued for.
    #[must_use]
    pub fn pair_epoch(&self) -> u64 {
        self.pair_epoch
    }

    /// Number of pairs on the table.
    #[must_use]
    pub fn total_pair_count(&self) -> usize {
        self.cards.len() / PAIR_SIZE
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count() / PAIR_SIZE
    }

    /// Fraction of pairs matched, in `[0, 1]`. Zero for an empty table.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.total_pair_count();
        if total == 0 {
            return 0.0;
        }
        self.matched_pair_count() as f64 / total as f64
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_pair_count() > 0 && self.matched_pair_count() == self.total_pair_count()
    }

    /// Immutable view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game: self.id,
            cards: self.cards.clone(),
            pending: self.pending(),
            matched_pairs: self.matched_pair_count(),
            total_pairs: self.total_pair_count(),
        }
    }

    // === Mutation ===

    /// Turn a card face-up and resolve the pair if one is complete.
    ///
    /// Unknown, matched, or already face-up cards are ignored. Selecting a
    /// card while two mismatched cards are still showing first turns the
    /// oldest of them back over, then pairs the new card with the other.
    pub fn select(&mut self, id: CardId) -> Resolution {
        let Some(position) = self.position(id) else {
            trace!("{}: ignoring unknown {}", self.id, id);
            return Resolution::Ignored;
        };
        if !self.cards[position].is_selectable() {
            trace!("{}: ignoring {} (already revealed)", self.id, id);
            return Resolution::Ignored;
        }

        if let Some(evicted) = self.selection.push(position) {
            if let Some(card) = self.cards.get_mut(evicted) {
                trace!("{}: evicting {} from selection", self.id, card.id);
                card.hide();
            }
        }
        if let Some(card) = self.cards.get_mut(position) {
            card.reveal();
        }

        let Some((first, second)) = self.selection.pair() else {
            return Resolution::Pending(id);
        };

        let first_id = self.cards[first].id;
        let second_id = self.cards[second].id;

        if self.cards[first].content == self.cards[second].content {
            for position in [first, second] {
                if let Some(card) = self.cards.get_mut(position) {
                    card.mark_matched();
                }
            }
            self.selection.clear();
            debug!(
                "{}: matched {} and {} ({}/{})",
                self.id,
                first_id,
                second_id,
                self.matched_pair_count(),
                self.total_pair_count()
            );
            Resolution::Matched(first_id, second_id)
        } else {
            self.pair_epoch += 1;
            debug!("{}: mismatch {} and {}", self.id, first_id, second_id);
            Resolution::Mismatched(first_id, second_id)
        }
    }

    /// Turn an unresolved mismatched pair back face-down.
    ///
    /// Only acts when exactly two cards are pending. The queue is emptied
    /// in that case whether or not anything was flipped. Returns true if
    /// cards were turned over.
    pub fn clear_unmatched_selections(&mut self) -> bool {
        let Some((first, second)) = self.selection.pair() else {
            return false;
        };

        let flipped = !self.cards[first].matched && !self.cards[second].matched;
        if flipped {
            for position in [first, second] {
                if let Some(card) = self.cards.get_mut(position) {
                    card.hide();
                }
            }
            debug!("{}: flipped back unmatched pair", self.id);
        }
        self.selection.clear();
        flipped
    }
}
