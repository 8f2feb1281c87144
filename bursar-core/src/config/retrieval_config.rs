use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{RetrievalError, RetrievalResult};

/// Retrieval and ranking configuration.
///
/// The two explicit weights are fractions of 1; the metadata signal
/// carries the implied remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of the semantic-overlap signal, [0, 1].
    pub semantic_weight: f64,
    /// Weight of the domain-keyword signal, [0, 1].
    pub keyword_weight: f64,
    /// Candidates retrieved per strategy before ranking.
    pub rerank_top_k: usize,
    /// Source documents attached to a response.
    pub ensemble_size: usize,
    /// Prior-conversation turns considered by contextual scoring.
    pub context_window: usize,
    /// Multiplier applied to structural metadata matches.
    pub metadata_boost: f64,
}

impl RetrievalConfig {
    /// Weight applied to the metadata signal (the implied remainder).
    pub fn metadata_weight(&self) -> f64 {
        1.0 - self.semantic_weight - self.keyword_weight
    }

    /// Range-check the weights. Run once at engine construction.
    pub fn validate(&self) -> RetrievalResult<()> {
        for (name, weight) in [
            ("semantic_weight", self.semantic_weight),
            ("keyword_weight", self.keyword_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(RetrievalError::InvalidConfig {
                    reason: format!("{name} must lie in [0, 1], got {weight}"),
                });
            }
        }
        if self.semantic_weight + self.keyword_weight > 1.0 {
            return Err(RetrievalError::InvalidConfig {
                reason: format!(
                    "semantic_weight + keyword_weight must not exceed 1, got {}",
                    self.semantic_weight + self.keyword_weight
                ),
            });
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            rerank_top_k: defaults::DEFAULT_RERANK_TOP_K,
            ensemble_size: defaults::DEFAULT_ENSEMBLE_SIZE,
            context_window: defaults::DEFAULT_CONTEXT_WINDOW,
            metadata_boost: defaults::DEFAULT_METADATA_BOOST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(RetrievalConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let config = RetrievalConfig {
            semantic_weight: 1.2,
            ..RetrievalConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RetrievalError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn weights_summing_past_one_are_rejected() {
        let config = RetrievalConfig {
            semantic_weight: 0.7,
            keyword_weight: 0.7,
            ..RetrievalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn metadata_weight_is_the_remainder() {
        let config = RetrievalConfig {
            semantic_weight: 0.5,
            keyword_weight: 0.3,
            ..RetrievalConfig::default()
        };
        assert!((config.metadata_weight() - 0.2).abs() < 1e-9);
    }
}
