use serde::{Deserialize, Serialize};

pub const DEFAULT_OPTION_COUNT: usize = 4;
pub const DEFAULT_PRACTICE_SIZE: usize = 50;
pub const DEFAULT_PASS_THRESHOLD: u32 = 80;

/// Tunables for deck building and practice-test scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Options per card, correct answer included.
    pub option_count: usize,
    /// Cards drawn for a practice test (capped at the bank size).
    pub practice_size: usize,
    /// Minimum rounded percentage that passes a practice test.
    pub pass_threshold: u32,
    /// Fixed seed for reproducible decks; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_practice_size(mut self, size: usize) -> Self {
        self.practice_size = size;
        self
    }

    /// Wrong answers wanted per card.
    pub fn distractor_count(&self) -> usize {
        self.option_count.saturating_sub(1)
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            option_count: DEFAULT_OPTION_COUNT,
            practice_size: DEFAULT_PRACTICE_SIZE,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_four_option_fifty_card_test() {
        let config = DeckConfig::new();
        assert_eq!(config.option_count, 4);
        assert_eq!(config.distractor_count(), 3);
        assert_eq!(config.practice_size, 50);
        assert_eq!(config.pass_threshold, 80);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let config = DeckConfig::new().with_seed(7).with_practice_size(10);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.practice_size, 10);
    }
}
