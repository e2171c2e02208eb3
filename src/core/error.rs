//! Construction-time errors.
//!
//! Play never fails: selections on unknown, matched or already revealed
//! cards are no-ops. The only failures are invariant violations caught
//! while building a deck.

use thiserror::Error;

use crate::cards::ContentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A content id appears more than once in the content set, which would
    /// put more than two cards on the table with the same face.
    #[error("content id `{0}` appears more than once in the content set")]
    DuplicateContent(ContentId),

    #[error("content id at position {0} is empty")]
    EmptyContent(usize),
}

pub type MemoryResult<T> = Result<T, MemoryError>;
