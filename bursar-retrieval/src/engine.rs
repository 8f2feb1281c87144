//! RagEngine: cache-fronted async orchestration over the retriever.
//!
//! One explicit instance per process; no globals. The cache lookup is
//! the fast path and never waits on retrieval. Misses for the same
//! fingerprint coalesce into a single computation; everyone else
//! awaits its result.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use bursar_core::config::{CacheConfig, PreprocessConfig, RetrievalConfig};
use bursar_core::errors::{RetrievalError, RetrievalResult};
use bursar_core::models::{Confidence, Document, QueryContext, RagResponse, ScoredCandidate, SourceRef};
use bursar_core::traits::SimilaritySearch;
use dashmap::DashMap;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::cache::{fingerprint, CacheStats, ResponseCache};
use crate::index::{IndexSet, SimilarityIndex};
use crate::monitor::{PerformanceMonitor, PerformanceReport};
use crate::preprocess::QueryPreprocessor;
use crate::retriever::HybridRetriever;

/// Characters of document content carried into a source snippet.
const SNIPPET_LEN: usize = 200;
/// Characters of document content contributed to the prepared answer
/// context, per document.
const DOC_CONTEXT_LEN: usize = 500;
/// Characters of conversation history considered by contextual
/// retrieval; older text is dropped.
const MAX_CONTEXT_LEN: usize = 4_000;

/// Answer text when retrieval completes with zero candidates.
const NO_RESULTS_ANSWER: &str = "No relevant information found.";

/// Queries primed into the cache by `warm_up`.
const WARM_UP_QUERIES: &[&str] = &[
    "What is a Pell Grant?",
    "How do I apply for federal student aid?",
    "What are the interest rates for direct loans?",
    "How much can I borrow?",
    "What is the FAFSA deadline?",
];

/// The orchestrator: preprocessing, cache, single-flight miss handling,
/// retrieval dispatch, and performance accounting.
pub struct RagEngine {
    preprocessor: QueryPreprocessor,
    cache: ResponseCache,
    monitor: PerformanceMonitor,
    provider: Arc<dyn SimilaritySearch>,
    retriever: RwLock<Option<Arc<HybridRetriever>>>,
    in_flight: DashMap<String, Arc<OnceCell<RagResponse>>>,
    config: RetrievalConfig,
}

impl RagEngine {
    /// Build an engine from validated configuration. The index starts
    /// empty; call [`index_documents`](Self::index_documents) before
    /// querying.
    pub fn new(
        retrieval: RetrievalConfig,
        cache: CacheConfig,
        preprocess: PreprocessConfig,
        provider: Arc<dyn SimilaritySearch>,
    ) -> RetrievalResult<Self> {
        retrieval.validate()?;
        Ok(Self {
            preprocessor: QueryPreprocessor::new(preprocess),
            cache: ResponseCache::new(cache),
            monitor: PerformanceMonitor::new(),
            provider,
            retriever: RwLock::new(None),
            in_flight: DashMap::new(),
            config: retrieval,
        })
    }

    /// Engine with all-default configuration.
    pub fn with_defaults(provider: Arc<dyn SimilaritySearch>) -> RetrievalResult<Self> {
        Self::new(
            RetrievalConfig::default(),
            CacheConfig::default(),
            PreprocessConfig::default(),
            provider,
        )
    }

    /// Build the index set over `documents`, replacing any previous
    /// corpus. Cached responses from the old corpus are dropped.
    pub fn index_documents(&self, documents: Vec<Document>) {
        let count = documents.len();
        let index = IndexSet::build(documents);
        let retriever = HybridRetriever::new(
            index,
            SimilarityIndex::new(Arc::clone(&self.provider)),
            self.config.clone(),
        );

        *self.write_retriever() = Some(Arc::new(retriever));
        self.cache.clear();
        info!(documents = count, "document index rebuilt");
    }

    /// Answer one query: cache hit, or single-flight retrieval on miss.
    ///
    /// Cancellation-safe: dropping the returned future before
    /// completion never stores a partial response.
    pub async fn query(&self, request: QueryContext) -> RetrievalResult<RagResponse> {
        let started = Instant::now();
        let normalized = self.preprocessor.normalize(&request.query);
        let key = fingerprint(&normalized);

        if let Some(hit) = self.cache.get(&key) {
            debug!(key = key.as_str(), "cache hit");
            self.monitor.record(started.elapsed().as_secs_f64(), true);
            return Ok(hit);
        }

        let Some(retriever) = self.read_retriever() else {
            self.monitor.record(started.elapsed().as_secs_f64(), false);
            return Err(RetrievalError::IndexNotInitialized);
        };

        let cell = self
            .in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let response = cell
            .get_or_init(|| self.compute(retriever, normalized, request.history, key.clone()))
            .await
            .clone();

        self.in_flight.remove(&key);
        self.monitor.record(started.elapsed().as_secs_f64(), false);
        Ok(response)
    }

    /// Run the retrieval strategies off the async runtime and convert
    /// the outcome into a response. Failures become a fallback response
    /// and are never cached; successes are cached before returning.
    async fn compute(
        &self,
        retriever: Arc<HybridRetriever>,
        query: String,
        history: Option<String>,
        key: String,
    ) -> RagResponse {
        let k = self.config.rerank_top_k;
        let worker = Arc::clone(&retriever);
        let joined = tokio::task::spawn_blocking(move || match history {
            Some(context) if !context.trim().is_empty() => {
                let context = tail_chars(&context, MAX_CONTEXT_LEN);
                worker.contextual(&query, &context, k)
            }
            _ => worker.ensemble(&query, k),
        })
        .await;

        let result = match joined {
            Ok(inner) => inner,
            Err(join_error) => Err(RetrievalError::SearchFailed {
                reason: join_error.to_string(),
            }),
        };

        match result {
            Ok(candidates) => {
                let response = self.build_response(&retriever, &candidates);
                self.cache.set(&key, response.clone());
                response
            }
            Err(error) => {
                warn!(%error, "retrieval failed, serving fallback response");
                fallback_response()
            }
        }
    }

    /// Assemble the response from ranked candidates: prepared context
    /// from the top documents, source references with snippets, and a
    /// confidence label derived from candidate count.
    fn build_response(
        &self,
        retriever: &HybridRetriever,
        candidates: &[ScoredCandidate],
    ) -> RagResponse {
        if candidates.is_empty() {
            return RagResponse {
                answer: NO_RESULTS_ANSWER.to_string(),
                sources: Vec::new(),
                confidence: Confidence::Medium,
            };
        }

        let documents = retriever.documents();
        let top = &candidates[..candidates.len().min(self.config.ensemble_size)];

        let answer = top
            .iter()
            .map(|c| head_chars(&documents[c.doc_id].content, DOC_CONTEXT_LEN))
            .collect::<Vec<_>>()
            .join("\n\n");

        let sources = top
            .iter()
            .map(|c| SourceRef {
                doc_id: c.doc_id,
                snippet: head_chars(&documents[c.doc_id].content, SNIPPET_LEN),
                metadata: documents[c.doc_id].metadata.clone(),
            })
            .collect();

        let confidence = if candidates.len() >= 3 {
            Confidence::High
        } else {
            Confidence::Medium
        };

        RagResponse {
            answer,
            sources,
            confidence,
        }
    }

    /// Answer a batch of queries in order. Each entry gets its own
    /// result; one failure does not abort the rest.
    pub async fn batch_query(
        &self,
        requests: &[QueryContext],
    ) -> Vec<RetrievalResult<RagResponse>> {
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            responses.push(self.query(request.clone()).await);
        }
        responses
    }

    /// Prime the cache with the common financial-aid queries. Errors
    /// are logged and skipped; warm-up is best-effort.
    pub async fn warm_up(&self) {
        for query in WARM_UP_QUERIES {
            if let Err(error) = self.query(QueryContext::new(*query)).await {
                debug!(query, %error, "warm-up query skipped");
            }
        }
        info!(queries = WARM_UP_QUERIES.len(), "cache warm-up complete");
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn performance_report(&self) -> PerformanceReport {
        self.monitor.report()
    }

    /// Release cached and in-flight state. The engine stays usable;
    /// subsequent queries recompute.
    pub fn close(&self) {
        self.cache.clear();
        self.in_flight.clear();
        info!("engine closed, cache and in-flight state dropped");
    }

    fn read_retriever(&self) -> Option<Arc<HybridRetriever>> {
        self.retriever
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn write_retriever(&self) -> std::sync::RwLockWriteGuard<'_, Option<Arc<HybridRetriever>>> {
        self.retriever.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Served when retrieval fails; never cached.
fn fallback_response() -> RagResponse {
    RagResponse {
        answer: "I'm having trouble accessing the information right now. \
                 Please try again."
            .to_string(),
        sources: Vec::new(),
        confidence: Confidence::Error,
    }
}

/// First `limit` characters, respecting char boundaries.
fn head_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Last `limit` characters, respecting char boundaries.
fn tail_chars(text: &str, limit: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(limit)).collect()
}
