//! Content identifiers - what a card shows when face-up.
//!
//! A `ContentId` names an image (or any value) a renderer knows how to draw.
//! The engine only compares them for equality.

use serde::{Deserialize, Serialize};

/// The built-in picture set.
pub const FLOWERS: [&str; 12] = [
    "flower1", "flower2", "flower3", "flower4", "flower5", "flower6",
    "flower7", "flower8", "flower9", "flower10", "flower11", "flower12",
];

/// Number of pairs in the standard game.
pub const STANDARD_PAIR_COUNT: usize = 6;

/// Name of the face a card shows.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Create a content id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ContentId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ContentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The standard content set: the first six flowers.
#[must_use]
pub fn default_contents() -> Vec<ContentId> {
    FLOWERS[..STANDARD_PAIR_COUNT]
        .iter()
        .copied()
        .map(ContentId::from)
        .collect()
}
