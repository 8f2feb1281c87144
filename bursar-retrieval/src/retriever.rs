//! HybridRetriever: the three retrieval strategies over one index set.

use bursar_core::config::RetrievalConfig;
use bursar_core::errors::{RetrievalError, RetrievalResult};
use bursar_core::models::{Document, ScoredCandidate};
use tracing::debug;

use crate::expansion::QueryExpander;
use crate::index::{IndexSet, SimilarityIndex};
use crate::ranking::{deduplication, scorer, sort_descending};

/// Hybrid retrieval over the built indices and the similarity
/// collaborator. Read-only after construction; safe to share across
/// concurrent queries without locking.
pub struct HybridRetriever {
    index: IndexSet,
    similarity: SimilarityIndex,
    expander: QueryExpander,
    config: RetrievalConfig,
}

impl HybridRetriever {
    pub fn new(index: IndexSet, similarity: SimilarityIndex, config: RetrievalConfig) -> Self {
        Self {
            index,
            similarity,
            expander: QueryExpander,
            config,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.index.documents
    }

    /// Whether a document set has been indexed.
    pub fn is_ready(&self) -> bool {
        !self.index.is_empty()
    }

    fn ensure_indexed(&self) -> RetrievalResult<()> {
        if self.index.is_empty() {
            return Err(RetrievalError::IndexNotInitialized);
        }
        Ok(())
    }

    /// Ensemble retrieval: union of similarity, keyword-index, and
    /// metadata-index candidates, deduplicated by content identity and
    /// ranked by the weighted ensemble score.
    pub fn ensemble(&self, query: &str, k: usize) -> RetrievalResult<Vec<ScoredCandidate>> {
        self.ensure_indexed()?;

        let mut candidate_ids = self.similarity.search(query, k)?;
        candidate_ids.extend(self.index.keyword.search(query));
        candidate_ids.extend(self.index.metadata.search(query));

        let unique = deduplication::dedup_by_content(&candidate_ids, &self.index.documents);
        debug!(
            gathered = candidate_ids.len(),
            unique = unique.len(),
            "ensemble candidates"
        );

        let mut scored: Vec<ScoredCandidate> = unique
            .iter()
            .map(|&id| scorer::ensemble_score(&self.index.documents[id], query, &self.config))
            .collect();

        sort_descending(&mut scored);
        scored.truncate(k);
        Ok(scored)
    }

    /// Multi-query retrieval: similarity search per expanded variant,
    /// unioned, deduplicated, and reranked query-only.
    pub fn multi_query(&self, query: &str, k: usize) -> RetrievalResult<Vec<ScoredCandidate>> {
        self.ensure_indexed()?;

        let variants = self.expander.expand(query);
        let mut candidate_ids = Vec::new();
        for variant in &variants {
            candidate_ids.extend(self.similarity.search(variant, k)?);
        }
        debug!(
            variants = variants.len(),
            gathered = candidate_ids.len(),
            "multi-query candidates"
        );

        let unique = deduplication::dedup_by_content(&candidate_ids, &self.index.documents);
        let mut scored: Vec<ScoredCandidate> = unique
            .iter()
            .map(|&id| scorer::ensemble_score(&self.index.documents[id], query, &self.config))
            .collect();

        sort_descending(&mut scored);
        scored.truncate(k);
        Ok(scored)
    }

    /// Contextual retrieval: search context+query for `2k` candidates,
    /// drop those below the context-overlap threshold, rerank the
    /// survivors by context score.
    pub fn contextual(
        &self,
        query: &str,
        context: &str,
        k: usize,
    ) -> RetrievalResult<Vec<ScoredCandidate>> {
        self.ensure_indexed()?;

        let combined = format!("{context} {query}").trim().to_string();
        let candidate_ids = self.similarity.search(&combined, k * 2)?;
        let unique = deduplication::dedup_by_content(&candidate_ids, &self.index.documents);

        let survivors: Vec<usize> = unique
            .into_iter()
            .filter(|&id| passes_context_filter(&self.index.documents[id], context))
            .collect();
        debug!(survivors = survivors.len(), "context filter applied");

        let mut scored: Vec<ScoredCandidate> = survivors
            .iter()
            .map(|&id| {
                let doc = &self.index.documents[id];
                let context_value = scorer::context_score(doc, query, context);
                ScoredCandidate {
                    doc_id: id,
                    semantic: scorer::semantic_score(doc, query),
                    keyword: scorer::keyword_score(doc, query),
                    metadata: scorer::metadata_score(doc),
                    context: context_value,
                    score: context_value,
                }
            })
            .collect();

        sort_descending(&mut scored);
        scored.truncate(k);
        Ok(scored)
    }
}

/// A candidate survives only if the ratio of shared context words to
/// total context words strictly exceeds 0.1. Empty context filters
/// nothing.
fn passes_context_filter(doc: &Document, context: &str) -> bool {
    use std::collections::HashSet;

    let context_lower = context.to_lowercase();
    let context_words: HashSet<&str> = context_lower.split_whitespace().collect();
    if context_words.is_empty() {
        return true;
    }

    let content_lower = doc.content.to_lowercase();
    let doc_words: HashSet<&str> = content_lower.split_whitespace().collect();
    let overlap = context_words
        .iter()
        .filter(|word| doc_words.contains(*word))
        .count();

    overlap as f64 / context_words.len() as f64 > 0.1
}
