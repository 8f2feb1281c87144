use serde::{Deserialize, Serialize};

use super::defaults;

/// Query normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Domain vocabulary; a query mentioning none of these as whole
    /// words gets the default context phrase prepended.
    pub anchor_terms: Vec<String>,
    /// The phrase prepended to ambiguous queries.
    pub default_context: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            anchor_terms: defaults::DEFAULT_ANCHOR_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_context: defaults::DEFAULT_CONTEXT_PHRASE.to_string(),
        }
    }
}
