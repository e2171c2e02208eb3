//! Card and game identity.
//!
//! Every card dealt into a game has a unique `CardId`, and every dealt game
//! has a unique `GameId`. Both come from an `IdAllocator` owned by the
//! engine, so identifiers are never reused across games of one engine.
//!
//! ## Why identity, not position
//!
//! Renderers address cards by `CardId`. Positions are an internal detail of
//! one `GameState` and are rebuilt on every deal. A tap or deferred call
//! carrying an id from an earlier game simply finds nothing in the new one.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::IdAllocator;
//!
//! let mut ids = IdAllocator::new();
//!
//! let game = ids.next_game();
//! let a = ids.next_card();
//! let b = ids.next_card();
//!
//! assert_ne!(a, b);
//! assert_eq!(game.raw(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity of a single card for the lifetime of its game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for CardId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity of one dealt `GameState`.
///
/// A fresh `GameId` is allocated on every new game. Deferred work scheduled
/// against a game carries its `GameId` and is dropped if the game changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a game ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Monotonic allocator for card and game identifiers.
///
/// Card and game counters are independent. Neither ever rewinds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next_card: u64,
    next_game: u64,
}

impl IdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new card ID.
    pub fn next_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;
        id
    }

    /// Allocate a new game ID.
    pub fn next_game(&mut self) -> GameId {
        let id = GameId(self.next_game);
        self.next_game += 1;
        id
    }

    /// Number of card IDs handed out so far.
    #[must_use]
    pub fn cards_allocated(&self) -> u64 {
        self.next_card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_are_sequential() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.next_card(), CardId(0));
        assert_eq!(ids.next_card(), CardId(1));
        assert_eq!(ids.next_card(), CardId(2));
        assert_eq!(ids.cards_allocated(), 3);
    }

    #[test]
    fn test_game_and_card_counters_are_independent() {
        let mut ids = IdAllocator::new();

        ids.next_card();
        ids.next_card();

        assert_eq!(ids.next_game(), GameId(0));
        assert_eq!(ids.next_game(), GameId(1));
        assert_eq!(ids.next_card(), CardId(2));
    }

    #[test]
    fn test_cloned_allocator_continues_independently() {
        let mut ids = IdAllocator::new();
        ids.next_card();

        let mut copy = ids.clone();

        assert_eq!(ids.next_card(), CardId(1));
        assert_eq!(copy.next_card(), CardId(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", GameId(7)), "Game(7)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
