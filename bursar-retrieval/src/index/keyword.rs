//! Keyword inverted index with pattern-based token extraction.
//!
//! Tokens are domain-salient strings — dollar amounts, percentages,
//! loan-type phrases — pulled out by a configurable extractor list.
//! Extending [`default_patterns`] is the only change needed to index a
//! new token family; ranking logic never sees the patterns.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use bursar_core::models::Document;
use regex::Regex;

macro_rules! token_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Dollar amounts ($6,495 / $6,495.00) ───────────────────────────────────
token_pattern!(RE_AMOUNT, r"\$[\d,]+(?:\.\d{2})?");

// ── Percentages (60% / 4.99%) ─────────────────────────────────────────────
token_pattern!(RE_PERCENTAGE, r"\d+(?:\.\d+)?%");

// ── Loan-type phrases ─────────────────────────────────────────────────────
token_pattern!(
    RE_LOAN_TYPE,
    r"(?:direct|subsidized|unsubsidized|plus|private)\s+loan"
);

/// A named token extractor.
pub struct TokenPattern {
    pub name: &'static str,
    regex: &'static LazyLock<Option<Regex>>,
}

impl TokenPattern {
    /// Case-normalized tokens matched in `text`.
    fn extract(&self, text: &str) -> Vec<String> {
        let Some(re) = self.regex.as_ref() else {
            return Vec::new();
        };
        re.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Default extractor list: amount-like, percentage-like, domain-term-like.
pub fn default_patterns() -> Vec<TokenPattern> {
    vec![
        TokenPattern {
            name: "amount",
            regex: &RE_AMOUNT,
        },
        TokenPattern {
            name: "percentage",
            regex: &RE_PERCENTAGE,
        },
        TokenPattern {
            name: "loan_type",
            regex: &RE_LOAN_TYPE,
        },
    ]
}

/// Inverted index from extracted token to the set of documents that
/// contain it.
pub struct KeywordIndex {
    postings: HashMap<String, BTreeSet<usize>>,
    patterns: Vec<TokenPattern>,
}

impl KeywordIndex {
    pub fn with_patterns(patterns: Vec<TokenPattern>) -> Self {
        Self {
            postings: HashMap::new(),
            patterns,
        }
    }

    /// Extract tokens from `doc` and record its id under each.
    pub fn add(&mut self, doc: &Document) {
        let text = doc.content.to_lowercase();
        for pattern in &self.patterns {
            for token in pattern.extract(&text) {
                self.postings.entry(token).or_default().insert(doc.id);
            }
        }
    }

    /// Documents indexed under `token` (case-normalized).
    pub fn lookup(&self, token: &str) -> Option<&BTreeSet<usize>> {
        self.postings.get(&token.to_lowercase())
    }

    /// Union of postings for every whitespace word of `query`, plus any
    /// multi-word tokens the extractors find in the query itself.
    pub fn search(&self, query: &str) -> BTreeSet<usize> {
        let lower = query.to_lowercase();
        let mut hits = BTreeSet::new();

        for word in lower.split_whitespace() {
            if let Some(ids) = self.postings.get(word) {
                hits.extend(ids.iter().copied());
            }
        }
        for pattern in &self.patterns {
            for token in pattern.extract(&lower) {
                if let Some(ids) = self.postings.get(&token) {
                    hits.extend(ids.iter().copied());
                }
            }
        }

        hits
    }

    /// Number of distinct tokens indexed.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::with_patterns(default_patterns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(contents: &[&str]) -> KeywordIndex {
        let mut index = KeywordIndex::default();
        for (i, content) in contents.iter().enumerate() {
            index.add(&Document::new(i, *content));
        }
        index
    }

    #[test]
    fn extracts_amounts_percentages_and_loan_types() {
        let index = indexed(&["Pell Grant pays $6,495 which covers 60% via a Direct Loan"]);
        assert!(index.lookup("$6,495").is_some());
        assert!(index.lookup("60%").is_some());
        assert!(index.lookup("direct loan").is_some());
    }

    #[test]
    fn lookup_is_case_normalized() {
        let index = indexed(&["A Subsidized Loan for undergraduates"]);
        assert!(index.lookup("Subsidized Loan").is_some());
    }

    #[test]
    fn search_unions_documents_across_tokens() {
        let index = indexed(&["costs $500 up front", "interest of 7% applies"]);
        let hits = index.search("what about $500 at 7%");
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn search_finds_multi_word_tokens_in_query() {
        let index = indexed(&["take a direct loan first"]);
        assert!(index.search("is a direct loan right for me").contains(&0));
    }

    #[test]
    fn unmatched_query_yields_no_hits() {
        let index = indexed(&["plain prose with no figures"]);
        assert!(index.search("anything at all").is_empty());
    }
}
