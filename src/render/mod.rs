//! Turning snapshots into something a player can look at.
//!
//! Renderers only ever see a `GameSnapshot`; they hold no mutation rights.

mod text;

pub use text::TextRenderer;

use crate::core::GameSnapshot;

/// Draws a snapshot.
pub trait Render {
    type Output;

    fn render(&self, snapshot: &GameSnapshot) -> Self::Output;
}
