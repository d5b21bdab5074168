use serde::{Deserialize, Serialize};

/// Default RNG seed when no config supplies one.
pub const DEFAULT_SEED: u64 = 42;

/// Resolved per-deck settings.
///
/// Resolution order is deck-local `config.yaml`, then the root `config.yaml`,
/// then these defaults. A `None` cap means unlimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Daily cap on due-card reviews surfaced for this deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reviews_per_day: Option<u32>,

    /// Daily cap on new cards surfaced for this deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_new_per_day: Option<u32>,

    /// Fractional multiplicative noise applied to suggested intervals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,

    /// Seed for the invocation-scoped RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            max_reviews_per_day: None,
            max_new_per_day: None,
            jitter: None,
            seed: DEFAULT_SEED,
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unlimited_with_fixed_seed() {
        let config = DeckConfig::default();
        assert_eq!(config.max_reviews_per_day, None);
        assert_eq!(config.max_new_per_day, None);
        assert_eq!(config.jitter, None);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn partial_document_fills_in_seed() {
        let config: DeckConfig = serde_yaml::from_str("max_new_per_day: 3").unwrap();
        assert_eq!(config.max_new_per_day, Some(3));
        assert_eq!(config.seed, DEFAULT_SEED);
    }
}
