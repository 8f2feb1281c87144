//! Scoring and deduplication for retrieval candidates.

pub mod deduplication;
pub mod scorer;

use bursar_core::models::ScoredCandidate;

/// Sort candidates by combined score, descending. Stable, so earlier
/// gathering order breaks ties deterministically.
pub fn sort_descending(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
