//! Inverted indices built once per document-set load.
//!
//! Indices are immutable after `IndexSet::build` until the next full
//! rebuild; no incremental updates. Read-only access needs no locking.

pub mod keyword;
pub mod metadata;
pub mod similarity;

use bursar_core::models::Document;
use tracing::info;

pub use keyword::KeywordIndex;
pub use metadata::MetadataIndex;
pub use similarity::SimilarityIndex;

/// Keyword and metadata indices plus the corpus they index, built in a
/// single pass over the supplied documents.
#[derive(Default)]
pub struct IndexSet {
    pub documents: Vec<Document>,
    pub keyword: KeywordIndex,
    pub metadata: MetadataIndex,
}

impl IndexSet {
    /// Build both inverted indices over `documents` in one pass.
    pub fn build(documents: Vec<Document>) -> Self {
        let mut keyword = KeywordIndex::default();
        let mut metadata = MetadataIndex::default();

        for doc in &documents {
            keyword.add(doc);
            metadata.add(doc);
        }

        info!(
            documents = documents.len(),
            keyword_tokens = keyword.len(),
            metadata_buckets = metadata.len(),
            "index build complete"
        );

        Self {
            documents,
            keyword,
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_indexes_every_document_once() {
        let docs = vec![
            Document::new(0, "Pell Grant awards up to $6,495 per year"),
            Document::new(1, "Direct loan interest is 5.5%"),
        ];
        let set = IndexSet::build(docs);
        assert_eq!(set.documents.len(), 2);
        assert!(!set.is_empty());
        assert!(set.keyword.len() > 0);
    }
}
