//! Property tests for the scorer bounds.

use bursar_core::config::RetrievalConfig;
use bursar_core::constants::{TAG_CHUNK_TYPE, TAG_DOCUMENT_TYPE, TAG_KEY_SENTENCE};
use bursar_core::models::Document;
use bursar_retrieval::ranking::scorer;
use proptest::prelude::*;

fn arbitrary_document() -> impl Strategy<Value = Document> {
    (
        "[a-z $%.,0-9]{0,120}",
        prop::option::of("[a-z_]{1,20}"),
        prop::option::of("[a-z_]{1,20}"),
        prop::bool::ANY,
    )
        .prop_map(|(content, doc_type, chunk_type, key_sentence)| {
            let mut doc = Document::new(0, content);
            if let Some(doc_type) = doc_type {
                doc = doc.with_tag(TAG_DOCUMENT_TYPE, doc_type);
            }
            if let Some(chunk_type) = chunk_type {
                doc = doc.with_tag(TAG_CHUNK_TYPE, chunk_type);
            }
            if key_sentence {
                doc = doc.with_tag(TAG_KEY_SENTENCE, "true");
            }
            doc
        })
}

proptest! {
    #[test]
    fn semantic_score_stays_in_unit_interval(
        doc in arbitrary_document(),
        query in "[a-z ]{0,80}",
    ) {
        let score = scorer::semantic_score(&doc, &query);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn keyword_score_stays_in_unit_interval(
        doc in arbitrary_document(),
        query in "[a-z ]{0,80}",
    ) {
        let score = scorer::keyword_score(&doc, &query);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn keyword_never_exceeds_semantic(
        doc in arbitrary_document(),
        query in "[a-z ]{0,80}",
    ) {
        // The keyword signal counts a subset of the semantic overlap.
        prop_assert!(
            scorer::keyword_score(&doc, &query)
                <= scorer::semantic_score(&doc, &query) + 1e-12
        );
    }

    #[test]
    fn metadata_score_is_capped(doc in arbitrary_document()) {
        let score = scorer::metadata_score(&doc);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn ensemble_score_is_bounded_when_weights_partition_one(
        doc in arbitrary_document(),
        query in "[a-z ]{0,80}",
        semantic_weight in 0.0f64..=1.0,
        keyword_fraction in 0.0f64..=1.0,
    ) {
        // Keep semantic + keyword ≤ 1 so metadata carries the rest.
        let keyword_weight = (1.0 - semantic_weight) * keyword_fraction;
        let config = RetrievalConfig {
            semantic_weight,
            keyword_weight,
            ..RetrievalConfig::default()
        };
        prop_assert!(config.validate().is_ok());

        let candidate = scorer::ensemble_score(&doc, &query, &config);
        prop_assert!(candidate.score >= 0.0);
        prop_assert!(candidate.score <= 1.0 + 1e-9);
    }
}
