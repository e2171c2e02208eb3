//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardFace;
use crate::core::{CardId, MemoryConfig};
use crate::rules::{FlipBack, GameEngine};

/// Python wrapper for a flip-back ticket.
#[pyclass(name = "FlipBack")]
#[derive(Clone, Debug)]
pub struct PyFlipBack(pub FlipBack);

#[pymethods]
impl PyFlipBack {
    /// How long to show both faces before resolving (milliseconds).
    #[getter]
    fn delay_ms(&self) -> u64 {
        self.0.delay.as_millis() as u64
    }

    fn __repr__(&self) -> String {
        format!("FlipBack(game={}, epoch={})", self.0.game.raw(), self.0.epoch)
    }
}

/// Python wrapper for the game engine.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    engine: GameEngine,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a game with the standard six-pair content set.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic deals (random if omitted)
    /// - flip_back_delay_ms: delay reported on flip-back tickets
    #[new]
    #[pyo3(signature = (seed = None, flip_back_delay_ms = 700))]
    fn new(seed: Option<u64>, flip_back_delay_ms: u64) -> PyResult<Self> {
        let mut config = MemoryConfig::default().with_flip_back_delay_ms(flip_back_delay_ms);
        config.seed = seed;
        let engine = GameEngine::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Deal a new game. Returns the new game id.
    fn new_game(&mut self) -> u64 {
        self.engine.new_game().raw()
    }

    /// Select a card. Returns a FlipBack ticket if a mismatched pair is showing.
    fn select(&mut self, card_id: u64) -> Option<PyFlipBack> {
        self.engine.select(CardId::new(card_id)).flip_back.map(PyFlipBack)
    }

    /// Run a deferred flip-back. Returns False if the ticket is stale.
    fn resolve_flip_back(&mut self, ticket: &PyFlipBack) -> bool {
        self.engine.resolve_flip_back(&ticket.0)
    }

    /// Flip back the current mismatched pair unconditionally.
    fn clear_unmatched_selections(&mut self) -> bool {
        self.engine.clear_unmatched_selections()
    }

    /// Fraction of pairs matched.
    #[getter]
    fn progress(&self) -> f64 {
        self.engine.progress()
    }

    /// Current game id.
    #[getter]
    fn game_id(&self) -> u64 {
        self.engine.game_id().raw()
    }

    /// Cards as (id, content, face_up, matched) tuples in table order.
    fn cards(&self) -> Vec<(u64, String, bool, bool)> {
        self.engine
            .cards()
            .iter()
            .map(|card| (card.id.raw(), card.content.to_string(), card.face_up, card.matched))
            .collect()
    }

    /// Card faces as a numpy array: 0 = face-down, 1 = face-up, 2 = matched.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let faces: Vec<u8> = self
            .engine
            .cards()
            .iter()
            .map(|card| match card.face() {
                CardFace::FaceDown => 0,
                CardFace::FaceUp => 1,
                CardFace::Matched => 2,
            })
            .collect();
        PyArray1::from_vec_bound(py, faces)
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(game={}, progress={:.2})",
            self.engine.game_id().raw(),
            self.engine.progress()
        )
    }
}
