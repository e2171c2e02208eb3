//! Plain-text table for terminals.
//!
//! ```text
//! Memory
//! Progress [######--------------] 2/6
//!
//!   1 flower3    2 ?          3 ?          4 ?
//!   5 ?          6 *flower1   7 ?          8 *flower1
//! ```
//!
//! Face-down cards show `?`, face-up cards their content, matched cards
//! their content prefixed with `*`.

use std::fmt::Write;

use crate::cards::{Card, CardFace};
use crate::core::GameSnapshot;

use super::Render;

/// Text renderer with a fixed column count and progress bar width.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    pub columns: usize,
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            columns: 4,
            bar_width: 20,
        }
    }
}

impl TextRenderer {
    /// Progress as a filled fraction of `bar_width`.
    #[must_use]
    pub fn progress_bar(&self, progress: f64) -> String {
        let filled = ((progress.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize)
            .min(self.bar_width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(self.bar_width - filled))
    }

    fn label(card: &Card) -> String {
        match card.face() {
            CardFace::FaceDown => "?".to_string(),
            CardFace::FaceUp => card.content.to_string(),
            CardFace::Matched => format!("*{}", card.content),
        }
    }
}

impl Render for TextRenderer {
    type Output = String;

    fn render(&self, snapshot: &GameSnapshot) -> String {
        let mut out = String::new();
        let columns = self.columns.max(1);

        // Writing to a String cannot fail
        let _ = writeln!(out, "Memory");
        let _ = writeln!(
            out,
            "Progress {} {}/{}",
            self.progress_bar(snapshot.progress()),
            snapshot.matched_pairs,
            snapshot.total_pairs
        );
        let _ = writeln!(out);

        for (position, card) in snapshot.cards.iter().enumerate() {
            let _ = write!(out, "{:>3} {:<10}", position + 1, Self::label(card));
            if (position + 1) % columns == 0 || position + 1 == snapshot.cards.len() {
                out.truncate(out.trim_end().len());
                out.push('\n');
            }
        }

        if snapshot.is_complete() {
            let _ = writeln!(out, "\nAll pairs found!");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use im::Vector;
    use smallvec::SmallVec;

    use super::*;
    use crate::cards::ContentId;
    use crate::core::{CardId, GameId};

    fn snapshot(cards: Vec<Card>, matched_pairs: usize) -> GameSnapshot {
        let total_pairs = cards.len() / 2;
        GameSnapshot {
            game: GameId::new(0),
            cards: cards.into_iter().collect::<Vector<_>>(),
            pending: SmallVec::new(),
            matched_pairs,
            total_pairs,
        }
    }

    #[test]
    fn test_progress_bar() {
        let renderer = TextRenderer {
            columns: 4,
            bar_width: 10,
        };

        assert_eq!(renderer.progress_bar(0.0), "[----------]");
        assert_eq!(renderer.progress_bar(0.5), "[#####-----]");
        assert_eq!(renderer.progress_bar(1.0), "[##########]");
        assert_eq!(renderer.progress_bar(3.0), "[##########]");
    }

    #[test]
    fn test_render_faces() {
        let mut up = Card::new(CardId::new(1), ContentId::from("b"));
        up.reveal();
        let mut matched = Card::new(CardId::new(2), ContentId::from("a"));
        matched.mark_matched();
        let down = Card::new(CardId::new(3), ContentId::from("b"));
        let mut twin = Card::new(CardId::new(4), ContentId::from("a"));
        twin.mark_matched();

        let text = TextRenderer::default().render(&snapshot(vec![up, matched, down, twin], 1));

        assert!(text.contains("1/2"));
        assert!(text.contains("1 b"));
        assert!(text.contains("2 *a"));
        assert!(text.contains("3 ?"));
        assert!(!text.contains("All pairs found"));
    }

    #[test]
    fn test_render_wraps_rows() {
        let cards = (0..6)
            .map(|i| Card::new(CardId::new(i), ContentId::from("x")))
            .collect();
        let renderer = TextRenderer {
            columns: 4,
            bar_width: 10,
        };

        let text = renderer.render(&snapshot(cards, 0));
        let grid: Vec<_> = text.lines().skip(3).collect();

        assert_eq!(grid.len(), 2);
        assert!(grid[1].trim_start().starts_with('5'));
    }
}
