//! Bounded FIFO of pending card positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of cards compared at once.
pub const PAIR_SIZE: usize = 2;

/// Ordered record of face-up, unmatched card positions.
///
/// Never holds more than `PAIR_SIZE` entries: pushing onto a full queue
/// evicts the oldest entry first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionQueue {
    entries: SmallVec<[usize; PAIR_SIZE]>,
}

impl SelectionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position.
    ///
    /// If the queue is already full, the oldest entry is removed *before*
    /// the new one is inserted and returned so the caller can turn that
    /// card back over.
    pub fn push(&mut self, position: usize) -> Option<usize> {
        let evicted = if self.entries.len() >= PAIR_SIZE {
            Some(self.entries.remove(0))
        } else {
            None
        };
        self.entries.push(position);
        evicted
    }

    /// The two pending positions, oldest first, if the queue is full.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.entries.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.entries.contains(&position)
    }

    /// Pending positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }
}
