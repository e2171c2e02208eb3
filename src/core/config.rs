//! Engine configuration.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{MemoryError, MemoryResult};
use crate::cards::{default_contents, ContentId};

/// Default delay before an unmatched pair is flipped back.
pub const DEFAULT_FLIP_BACK_DELAY_MS: u64 = 700;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Content ids dealt as pairs. Each must appear once.
    pub contents: Vec<ContentId>,

    /// How long both faces of a mismatched pair stay visible (milliseconds).
    pub flip_back_delay_ms: u64,

    /// Seed for deck shuffling.
    /// `None` draws a seed from OS entropy when the engine is created.
    pub seed: Option<u64>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            contents: default_contents(),
            flip_back_delay_ms: DEFAULT_FLIP_BACK_DELAY_MS,
            seed: None,
        }
    }
}

impl MemoryConfig {
    /// Replace the content set.
    pub fn with_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ContentId>,
    {
        self.contents = contents.into_iter().map(Into::into).collect();
        self
    }

    /// Set the flip-back delay.
    pub fn with_flip_back_delay_ms(mut self, delay_ms: u64) -> Self {
        self.flip_back_delay_ms = delay_ms;
        self
    }

    /// Set a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Flip-back delay as a `Duration`.
    #[must_use]
    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_delay_ms)
    }

    /// Number of pairs a game dealt from this config holds.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.contents.len()
    }

    /// Check the content set can be dealt.
    pub fn validate(&self) -> MemoryResult<()> {
        validate_contents(&self.contents)
    }
}

/// Reject content sets that would break the pair invariant.
pub(crate) fn validate_contents(contents: &[ContentId]) -> MemoryResult<()> {
    let mut seen = FxHashSet::default();
    for (position, content) in contents.iter().enumerate() {
        if content.is_empty() {
            return Err(MemoryError::EmptyContent(position));
        }
        if !seen.insert(content) {
            return Err(MemoryError::DuplicateContent(content.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MemoryConfig::default();
        assert_eq!(config.pair_count(), 6);
        assert_eq!(config.flip_back_delay(), Duration::from_millis(700));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MemoryConfig::default()
            .with_contents(["a", "b", "c"])
            .with_flip_back_delay_ms(250)
            .with_seed(123);

        assert_eq!(config.pair_count(), 3);
        assert_eq!(config.flip_back_delay_ms, 250);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_duplicate_content_rejected() {
        let config = MemoryConfig::default().with_contents(["a", "b", "a"]);
        assert_eq!(
            config.validate(),
            Err(MemoryError::DuplicateContent(ContentId::from("a")))
        );
    }

    #[test]
    fn test_empty_content_id_rejected() {
        let config = MemoryConfig::default().with_contents(["a", ""]);
        assert_eq!(config.validate(), Err(MemoryError::EmptyContent(1)));
    }

    #[test]
    fn test_empty_content_set_is_valid() {
        let config = MemoryConfig::default().with_contents(Vec::<String>::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.pair_count(), 0);
    }

    #[test]
    fn test_serialization() {
        let config = MemoryConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MemoryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
