//! Cards and their content.
//!
//! - `ContentId`: the face a card shows (an image name)
//! - `Card`: one card on the table, with face-up and matched flags

pub mod card;
pub mod content;

pub use card::{Card, CardFace};
pub use content::{default_contents, ContentId, FLOWERS, STANDARD_PAIR_COUNT};
