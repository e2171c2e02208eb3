//! Core engine types: identifiers, RNG, configuration, errors, state.
//!
//! `GameState` holds one dealt game and implements the selection rules.
//! Everything else here supports it.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;
pub mod snapshot;

pub use entity::{CardId, GameId, IdAllocator};
pub use rng::{GameRng, GameRngState};
pub use config::{MemoryConfig, DEFAULT_FLIP_BACK_DELAY_MS};
pub use error::{MemoryError, MemoryResult};
pub use state::GameState;
pub use snapshot::GameSnapshot;
