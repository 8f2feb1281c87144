//! Content-identity deduplication.
//!
//! Two candidates are the same document iff their textual content is
//! byte-identical; the first (highest-ranked) occurrence wins.

use std::collections::HashSet;

use bursar_core::models::Document;

/// Deduplicate candidate ids by document content, preserving order.
/// Ids outside the corpus are dropped.
pub fn dedup_by_content(ids: &[usize], documents: &[Document]) -> Vec<usize> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();

    for &id in ids {
        let Some(doc) = documents.get(id) else {
            continue;
        };
        if seen.insert(doc.content.as_str()) {
            unique.push(id);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_content_keeps_first_occurrence() {
        let documents = vec![
            Document::new(0, "duplicate text"),
            Document::new(1, "duplicate text"),
            Document::new(2, "unique text"),
        ];
        let unique = dedup_by_content(&[1, 0, 2], &documents);
        assert_eq!(unique, vec![1, 2]);
    }

    #[test]
    fn out_of_range_ids_are_dropped() {
        let documents = vec![Document::new(0, "only doc")];
        assert_eq!(dedup_by_content(&[7, 0], &documents), vec![0]);
    }

    #[test]
    fn repeated_ids_collapse() {
        let documents = vec![Document::new(0, "a"), Document::new(1, "b")];
        assert_eq!(dedup_by_content(&[0, 0, 1, 1, 0], &documents), vec![0, 1]);
    }
}
