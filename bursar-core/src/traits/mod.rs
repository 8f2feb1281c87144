//! Collaborator seams consumed by the retrieval core.

use crate::errors::RetrievalResult;

/// External embedding/vector-search collaborator.
///
/// Implementations index the same document set the engine indexes and
/// are read-only afterwards, so they may be queried concurrently
/// without locking. Shared as `Arc<dyn SimilaritySearch>`.
pub trait SimilaritySearch: Send + Sync {
    /// Return up to `k` document ids ranked by similarity to `text`.
    fn search(&self, text: &str, k: usize) -> RetrievalResult<Vec<usize>>;
}
