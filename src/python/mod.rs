//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(seed=42)
//! first, second = game.cards()[0][0], game.cards()[1][0]
//!
//! game.select(first)
//! ticket = game.select(second)   # FlipBack if the faces differ
//! if ticket is not None:
//!     # ... wait ticket.delay_ms, then
//!     game.resolve_flip_back(ticket)
//!
//! print(game.progress, game.observation())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// memory_match: a pair-matching memory game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    m.add_class::<PyFlipBack>()?;
    Ok(())
}
