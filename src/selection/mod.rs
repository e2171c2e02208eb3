//! Selection bookkeeping and pair resolution.
//!
//! The selection queue records face-up, unmatched cards waiting to be
//! compared. When it holds two, the pair is resolved:
//!
//! - **Matched**: both cards stay face-up for good, queue empties
//! - **Mismatched**: both stay face-up, queue keeps them until a
//!   flip-back (or a third tap evicts the oldest)
//!
//! ```
//! use memory_match::selection::SelectionQueue;
//!
//! let mut queue = SelectionQueue::new();
//! assert_eq!(queue.push(3), None);
//! assert_eq!(queue.push(7), None);
//! assert_eq!(queue.pair(), Some((3, 7)));
//!
//! // A third entry evicts the oldest before it is inserted
//! assert_eq!(queue.push(9), Some(3));
//! assert_eq!(queue.pair(), Some((7, 9)));
//! ```

mod queue;

pub use queue::{SelectionQueue, PAIR_SIZE};

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// What a single selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The tap was a no-op: unknown, matched, or already face-up card.
    Ignored,

    /// The card was revealed and waits for a partner.
    Pending(CardId),

    /// The two cards share content and are now matched.
    Matched(CardId, CardId),

    /// The two cards differ. Both stay face-up until flipped back.
    Mismatched(CardId, CardId),
}

impl Resolution {
    /// Did the selection change any state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Resolution::Ignored)
    }

    /// Does this outcome need a delayed flip-back?
    #[must_use]
    pub fn needs_flip_back(&self) -> bool {
        matches!(self, Resolution::Mismatched(..))
    }
}
