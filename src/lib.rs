//! # memory-match
//!
//! A pair-matching memory game engine: flip two cards, keep them if they
//! match, turn them back over if they don't.
//!
//! ## Design Principles
//!
//! 1. **State drives the view**: The engine owns all mutation. Front ends
//!    render immutable `GameSnapshot`s and forward taps as `select` calls.
//!
//! 2. **Identity, not position**: Cards are addressed by `CardId`. A new
//!    game allocates fresh ids, so stale taps find nothing.
//!
//! 3. **No failures during play**: Invalid selections are no-ops. The only
//!    error is an invalid content set, rejected when the engine is built.
//!
//! ## Architecture
//!
//! - **Deferred flip-back**: A mismatched pair stays face-up until the front
//!   end resolves a `FlipBack` ticket. Tickets are keyed to the game and
//!   pair they were issued for, so a late one never touches a newer game.
//!
//! - **Persistent Data Structures**: Cards live in an `im::Vector`, making
//!   snapshots O(1).
//!
//! - **Deterministic shuffles**: Seeded ChaCha8, one forked stream per deal.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, configuration, errors, game state, snapshots
//! - `cards`: Content ids and cards
//! - `selection`: Selection queue and pair resolution outcomes
//! - `rules`: `GameEngine`, the front end's entry point
//! - `session`: Engine plus flip-back timer for event-loop front ends
//! - `render`: Text rendering of snapshots

pub mod core;
pub mod cards;
pub mod selection;
pub mod rules;
pub mod session;
pub mod render;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameId, IdAllocator,
    GameRng, GameRngState,
    MemoryConfig, MemoryError, MemoryResult,
    GameState, GameSnapshot,
};

pub use crate::cards::{Card, CardFace, ContentId};

pub use crate::selection::{Resolution, SelectionQueue};

pub use crate::rules::{FlipBack, GameEngine, SelectOutcome};

pub use crate::session::{FlipBackTimer, Session};

pub use crate::render::{Render, TextRenderer};
