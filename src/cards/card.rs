//! Cards on the table.

use serde::{Deserialize, Serialize};

use super::content::ContentId;
use crate::core::entity::CardId;

/// Visible state of a card.
///
/// `FaceDown -> FaceUp -> {Matched | FaceDown}`. `Matched` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    FaceDown,
    FaceUp,
    Matched,
}

/// A single card in a dealt game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity within its game.
    pub id: CardId,

    /// What the card shows when face-up.
    pub content: ContentId,

    /// Is the face currently shown?
    pub face_up: bool,

    /// Has this card been paired with its twin? Matched cards stay face-up.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: ContentId) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
        }
    }

    /// Current visible state.
    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.face_up {
            CardFace::FaceUp
        } else {
            CardFace::FaceDown
        }
    }

    /// Can a tap on this card do anything?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.matched && !self.face_up
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn the card back over. Matched cards never turn back.
    pub(crate) fn hide(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(CardId::new(1), ContentId::from("flower1"))
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = card();
        assert_eq!(card.face(), CardFace::FaceDown);
        assert!(card.is_selectable());
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut card = card();

        card.reveal();
        assert_eq!(card.face(), CardFace::FaceUp);
        assert!(!card.is_selectable());

        card.hide();
        assert_eq!(card.face(), CardFace::FaceDown);
    }

    #[test]
    fn test_matched_is_terminal() {
        let mut card = card();
        card.reveal();
        card.mark_matched();

        card.hide();

        assert_eq!(card.face(), CardFace::Matched);
        assert!(card.face_up);
        assert!(!card.is_selectable());
    }
}
