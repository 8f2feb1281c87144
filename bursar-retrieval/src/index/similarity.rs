//! Front over the external embedding/vector-search collaborator.

use std::sync::Arc;

use bursar_core::errors::RetrievalResult;
use bursar_core::traits::SimilaritySearch;
use tracing::debug;

/// Thin wrapper owning the shared collaborator handle.
///
/// The collaborator computes embeddings out of process; only its
/// query contract is in scope here.
#[derive(Clone)]
pub struct SimilarityIndex {
    provider: Arc<dyn SimilaritySearch>,
}

impl SimilarityIndex {
    pub fn new(provider: Arc<dyn SimilaritySearch>) -> Self {
        Self { provider }
    }

    /// Ranked document ids for `text`, at most `k`. Empty text short-
    /// circuits to an empty result without consulting the collaborator.
    pub fn search(&self, text: &str, k: usize) -> RetrievalResult<Vec<usize>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut ids = self.provider.search(text, k)?;
        ids.truncate(k);
        debug!(query = text, hits = ids.len(), "similarity search");
        Ok(ids)
    }
}
