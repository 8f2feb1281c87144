use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Confidence label attached to every response.
///
/// `High` when at least three documents were retrieved, `Medium`
/// otherwise, `Error` when retrieval failed and a fallback was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Error,
}

/// Reference to a source document backing an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub doc_id: usize,
    /// Leading slice of the document content (200 chars).
    pub snippet: String,
    pub metadata: HashMap<String, String>,
}

/// The unit cached and returned to the caller. Identical in shape
/// whether served from cache, freshly computed, or a failure fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagResponse {
    /// Prepared context handed to the downstream generation
    /// collaborator (out of scope here).
    pub answer: String,
    /// Source documents in rank order.
    pub sources: Vec<SourceRef>,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Confidence::High).unwrap(),
            "\"high\""
        );
        assert_eq!(
            serde_json::to_string(&Confidence::Error).unwrap(),
            "\"error\""
        );
    }
}
