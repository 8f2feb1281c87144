//! Relevance scorers: pure functions over (document, query[, context]).
//!
//! Bounds: semantic and keyword scores lie in [0, 1]; the metadata
//! score is capped at 1.0; the weighted ensemble therefore stays ≤ 1
//! whenever the three weights sum to 1.

use std::collections::HashSet;

use bursar_core::config::RetrievalConfig;
use bursar_core::constants::{
    CHUNK_HIERARCHICAL, DOC_TYPE_FINANCIAL_AID, DOC_TYPE_LOAN_INFORMATION, TAG_CHUNK_TYPE,
    TAG_DOCUMENT_TYPE,
};
use bursar_core::models::{Document, ScoredCandidate};

/// Fixed domain vocabulary backing the keyword signal.
const DOMAIN_TERMS: &[&str] = &[
    "loan",
    "grant",
    "scholarship",
    "interest",
    "rate",
    "amount",
    "cost",
];

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn overlap_ratio(query_words: &HashSet<String>, doc_words: &HashSet<String>) -> f64 {
    let overlap = query_words.intersection(doc_words).count();
    overlap as f64 / query_words.len().max(1) as f64
}

/// Normalized query/document word overlap, [0, 1].
pub fn semantic_score(doc: &Document, query: &str) -> f64 {
    overlap_ratio(&word_set(query), &word_set(&doc.content))
}

/// Query/document overlap restricted to the domain-term set, [0, 1].
pub fn keyword_score(doc: &Document, query: &str) -> f64 {
    let query_words = word_set(query);
    let doc_words = word_set(&doc.content);
    let hits = query_words
        .iter()
        .filter(|w| doc_words.contains(*w) && DOMAIN_TERMS.contains(&w.as_str()))
        .count();
    hits as f64 / query_words.len().max(1) as f64
}

/// Structural metadata boosts: hierarchical chunk +0.3, key sentence
/// +0.4, domain document type +0.2. Capped at 1.0.
pub fn metadata_score(doc: &Document) -> f64 {
    let mut score: f64 = 0.0;
    if doc.tag_or_general(TAG_CHUNK_TYPE) == CHUNK_HIERARCHICAL {
        score += 0.3;
    }
    if doc.is_key_sentence() {
        score += 0.4;
    }
    let doc_type = doc.tag_or_general(TAG_DOCUMENT_TYPE);
    if doc_type == DOC_TYPE_FINANCIAL_AID || doc_type == DOC_TYPE_LOAN_INFORMATION {
        score += 0.2;
    }
    score.min(1.0)
}

/// Context-aware score: normalized query overlap + 0.5 × normalized
/// context overlap + structural boosts (+0.2 hierarchical, +0.3 key
/// sentence).
pub fn context_score(doc: &Document, query: &str, context: &str) -> f64 {
    let doc_words = word_set(&doc.content);
    let mut score = overlap_ratio(&word_set(query), &doc_words);

    if !context.trim().is_empty() {
        score += overlap_ratio(&word_set(context), &doc_words) * 0.5;
    }

    if doc.tag_or_general(TAG_CHUNK_TYPE) == CHUNK_HIERARCHICAL {
        score += 0.2;
    }
    if doc.is_key_sentence() {
        score += 0.3;
    }

    score
}

/// Weighted combination of the three ensemble signals.
pub fn ensemble_score(doc: &Document, query: &str, config: &RetrievalConfig) -> ScoredCandidate {
    let semantic = semantic_score(doc, query);
    let keyword = keyword_score(doc, query);
    let metadata = metadata_score(doc);

    let score = config.semantic_weight * semantic
        + config.keyword_weight * keyword
        + config.metadata_weight() * metadata;

    ScoredCandidate {
        doc_id: doc.id,
        semantic,
        keyword,
        metadata,
        context: 0.0,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bursar_core::constants::TAG_KEY_SENTENCE;

    #[test]
    fn semantic_score_is_query_overlap() {
        let doc = Document::new(0, "pell grant awards for undergraduates");
        // 2 of 4 query words appear in the document.
        let score = semantic_score(&doc, "pell grant deadline today");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn keyword_score_counts_only_domain_terms() {
        let doc = Document::new(0, "loan interest accrues daily");
        // "loan" and "interest" are domain terms; "accrues" is not.
        let score = keyword_score(&doc, "loan interest accrues");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn metadata_score_caps_at_one() {
        let doc = Document::new(0, "x")
            .with_tag(TAG_CHUNK_TYPE, CHUNK_HIERARCHICAL)
            .with_tag(TAG_KEY_SENTENCE, "true")
            .with_tag(TAG_DOCUMENT_TYPE, DOC_TYPE_FINANCIAL_AID);
        // 0.3 + 0.4 + 0.2 = 0.9, under the cap.
        assert!((metadata_score(&doc) - 0.9).abs() < 1e-9);
        assert!(metadata_score(&doc) <= 1.0);
    }

    #[test]
    fn context_score_halves_context_overlap() {
        let doc = Document::new(0, "fafsa deadline june");
        // Query overlap 1/2, context overlap 1/2 halved to 1/4.
        let score = context_score(&doc, "fafsa forms", "deadline extension");
        assert!((score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn empty_context_adds_nothing() {
        let doc = Document::new(0, "fafsa deadline june");
        let with_empty = context_score(&doc, "fafsa forms", "   ");
        let query_only = semantic_score(&doc, "fafsa forms");
        assert!((with_empty - query_only).abs() < 1e-9);
    }

    #[test]
    fn ensemble_uses_configured_weights() {
        let doc = Document::new(0, "loan").with_tag(TAG_DOCUMENT_TYPE, DOC_TYPE_LOAN_INFORMATION);
        let config = RetrievalConfig {
            semantic_weight: 0.5,
            keyword_weight: 0.3,
            ..RetrievalConfig::default()
        };
        let candidate = ensemble_score(&doc, "loan", &config);
        // semantic 1.0, keyword 1.0, metadata 0.2, remainder weight 0.2.
        let expected = 0.5 * 1.0 + 0.3 * 1.0 + 0.2 * 0.2;
        assert!((candidate.score - expected).abs() < 1e-9);
    }
}
