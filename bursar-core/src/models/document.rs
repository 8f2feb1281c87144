use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{GENERAL_BUCKET, TAG_KEY_SENTENCE};

/// Immutable unit of retrievable text.
///
/// `id` is the document's position in the corpus supplied at index
/// time. Documents are never mutated after indexing; the indices hold
/// ids, not copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: usize,
    pub content: String,
    /// Structural tags: `document_type`, `chunk_type`, plus arbitrary
    /// key/value pairs attached by the ingestion pipeline.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Document {
    pub fn new(id: usize, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Tag lookup with the `"general"` fallback bucket. Missing or
    /// unknown tags never raise an error.
    pub fn tag_or_general(&self, key: &str) -> &str {
        self.metadata
            .get(key)
            .map(String::as_str)
            .unwrap_or(GENERAL_BUCKET)
    }

    /// Whether the document is tagged as a key/salient sentence.
    pub fn is_key_sentence(&self) -> bool {
        self.metadata
            .get(TAG_KEY_SENTENCE)
            .is_some_and(|v| v == "true")
    }
}
