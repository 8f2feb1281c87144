//! Query normalization and domain-context injection.

use bursar_core::config::PreprocessConfig;

/// Normalizes raw query text and biases ambiguous queries toward the
/// financial-aid domain.
///
/// Pure: no side effects, no shared state.
#[derive(Debug, Clone)]
pub struct QueryPreprocessor {
    config: PreprocessConfig,
}

impl QueryPreprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Collapse whitespace, lowercase, and prepend the default context
    /// phrase when no anchor term occurs as a whole word.
    pub fn normalize(&self, query: &str) -> String {
        let collapsed = query
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if self.has_anchor(&collapsed) {
            collapsed
        } else {
            format!("{} {}", self.config.default_context, collapsed)
                .trim_end()
                .to_string()
        }
    }

    fn has_anchor(&self, normalized: &str) -> bool {
        self.config
            .anchor_terms
            .iter()
            .any(|term| contains_whole(normalized, term))
    }
}

impl Default for QueryPreprocessor {
    fn default() -> Self {
        Self::new(PreprocessConfig::default())
    }
}

/// Whole-word (or whole-phrase) containment over space-separated text.
fn contains_whole(normalized: &str, term: &str) -> bool {
    format!(" {normalized} ").contains(&format!(" {term} "))
}
