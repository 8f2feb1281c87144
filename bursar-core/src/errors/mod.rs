//! Error types for the retrieval core.
//!
//! Missing or unknown metadata tags are NOT errors (they degrade to the
//! default bucket), and cache misses, expired entries, and empty result
//! sets are normal control flow.

/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Any retrieval call made before a document set has been indexed.
    /// Fails fast rather than silently returning empty results.
    #[error("index not initialized: supply a document set before querying")]
    IndexNotInitialized,

    /// The similarity-search collaborator failed. Contained at the
    /// engine boundary and converted into a fallback response.
    #[error("similarity search failed: {reason}")]
    SearchFailed { reason: String },

    /// Configuration rejected at construction time.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
