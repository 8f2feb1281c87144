//! Metadata inverted index over the two structural tag axes.

use std::collections::{BTreeSet, HashMap};

use bursar_core::constants::{
    DOC_TYPE_APPLICATION_PROCESS, DOC_TYPE_FINANCIAL_AID, DOC_TYPE_LOAN_INFORMATION,
    TAG_CHUNK_TYPE, TAG_DOCUMENT_TYPE,
};
use bursar_core::models::Document;

/// Groups document ids by `document_type` and `chunk_type`. Both axes
/// share one bucket map; missing or unknown tags fall back to the
/// `"general"` bucket and never raise an error.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    buckets: HashMap<String, BTreeSet<usize>>,
}

impl MetadataIndex {
    /// Record `doc` under both of its tag axes.
    pub fn add(&mut self, doc: &Document) {
        for axis in [TAG_DOCUMENT_TYPE, TAG_CHUNK_TYPE] {
            let tag = doc.tag_or_general(axis);
            self.buckets
                .entry(tag.to_string())
                .or_default()
                .insert(doc.id);
        }
    }

    /// Documents grouped under `tag`.
    pub fn bucket(&self, tag: &str) -> Option<&BTreeSet<usize>> {
        self.buckets.get(tag)
    }

    /// Category buckets selected by substring rules on the query:
    /// loan talk pulls loan material, grant/financial-aid talk pulls
    /// aid material, application talk pulls process material.
    pub fn search(&self, query: &str) -> BTreeSet<usize> {
        let lower = query.to_lowercase();
        let mut hits = BTreeSet::new();

        let mut pull = |tag: &str| {
            if let Some(ids) = self.buckets.get(tag) {
                hits.extend(ids.iter().copied());
            }
        };

        if lower.contains("loan") {
            pull(DOC_TYPE_LOAN_INFORMATION);
        }
        if lower.contains("grant") || lower.contains("financial aid") {
            pull(DOC_TYPE_FINANCIAL_AID);
        }
        if lower.contains("application") || lower.contains("apply") {
            pull(DOC_TYPE_APPLICATION_PROCESS);
        }

        hits
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bursar_core::constants::GENERAL_BUCKET;

    #[test]
    fn untagged_documents_land_in_general() {
        let mut index = MetadataIndex::default();
        index.add(&Document::new(0, "no tags here"));
        assert!(index.bucket(GENERAL_BUCKET).is_some_and(|b| b.contains(&0)));
    }

    #[test]
    fn both_axes_are_indexed() {
        let mut index = MetadataIndex::default();
        index.add(
            &Document::new(3, "loan limits")
                .with_tag(TAG_DOCUMENT_TYPE, DOC_TYPE_LOAN_INFORMATION)
                .with_tag(TAG_CHUNK_TYPE, "hierarchical"),
        );
        assert!(index.bucket(DOC_TYPE_LOAN_INFORMATION).is_some());
        assert!(index.bucket("hierarchical").is_some());
    }

    #[test]
    fn query_substrings_select_category_buckets() {
        let mut index = MetadataIndex::default();
        index.add(&Document::new(0, "x").with_tag(TAG_DOCUMENT_TYPE, DOC_TYPE_LOAN_INFORMATION));
        index.add(&Document::new(1, "y").with_tag(TAG_DOCUMENT_TYPE, DOC_TYPE_FINANCIAL_AID));

        assert!(index.search("student loan rates").contains(&0));
        assert!(index.search("grant eligibility").contains(&1));
        assert!(index.search("weather today").is_empty());
    }
}
