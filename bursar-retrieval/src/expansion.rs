//! Query expansion: domain-suffix augmentation + synonym substitution.
//!
//! E.g., "pell grant" → "pell grant application", "pell scholarship".

use std::collections::HashSet;

/// Suffix phrases appended when the matching domain keyword is present
/// anywhere in the query. Slice order fixes the variant order.
const SUFFIXES: &[(&str, &[&str])] = &[
    ("loan", &["interest rate", "repayment", "eligibility"]),
    ("grant", &["application", "requirements", "deadline"]),
    (
        "fafsa",
        &["application process", "requirements", "documents needed"],
    ),
];

/// Word → synonym substitutions, one variant per synonym per matched word.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("loan", &["borrowing", "debt", "financial aid"]),
    ("grant", &["scholarship", "award", "free money"]),
    ("interest", &["rate", "percentage", "cost"]),
    ("application", &["apply", "submit", "process"]),
];

/// Generates query variants for multi-query retrieval.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExpander;

impl QueryExpander {
    /// Expand `query` into unique variants. The original query is
    /// always first; duplicates are dropped in insertion order so the
    /// variant set is deterministic.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let lower = query.to_lowercase();
        let mut variants: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        push_unique(&mut variants, &mut seen, query.to_string());

        for (keyword, suffixes) in SUFFIXES {
            if lower.contains(keyword) {
                for suffix in *suffixes {
                    push_unique(&mut variants, &mut seen, format!("{query} {suffix}"));
                }
            }
        }

        for (word, synonyms) in SYNONYMS {
            if lower.contains(word) {
                for synonym in *synonyms {
                    push_unique(&mut variants, &mut seen, lower.replace(word, synonym));
                }
            }
        }

        variants
    }
}

fn push_unique(variants: &mut Vec<String>, seen: &mut HashSet<String>, variant: String) {
    if seen.insert(variant.clone()) {
        variants.push(variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_query_comes_first() {
        let variants = QueryExpander.expand("pell grant");
        assert_eq!(variants[0], "pell grant");
    }

    #[test]
    fn loan_queries_get_suffix_variants() {
        let variants = QueryExpander.expand("direct loan");
        assert!(variants.contains(&"direct loan interest rate".to_string()));
        assert!(variants.contains(&"direct loan repayment".to_string()));
        assert!(variants.contains(&"direct loan eligibility".to_string()));
    }

    #[test]
    fn synonyms_substitute_in_place() {
        let variants = QueryExpander.expand("pell grant");
        assert!(variants.contains(&"pell scholarship".to_string()));
        assert!(variants.contains(&"pell award".to_string()));
    }

    #[test]
    fn variants_are_unique() {
        let variants = QueryExpander.expand("loan grant fafsa interest application");
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn unmatched_query_expands_to_itself() {
        assert_eq!(QueryExpander.expand("hello world"), vec!["hello world"]);
    }
}
