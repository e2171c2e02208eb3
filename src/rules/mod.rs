//! Game engine: deals games and forwards selections to the current one.
//!
//! The presentation layer never mutates a `GameState` directly. It calls
//! into `GameEngine` and re-renders from snapshots.

pub mod engine;

pub use engine::{FlipBack, GameEngine, SelectOutcome};
