/// Per-query scored candidate: component scores plus the combined
/// score. Transient — created during ranking, discarded after.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub doc_id: usize,
    /// Normalized query/document word overlap, [0, 1].
    pub semantic: f64,
    /// Overlap restricted to the domain-term set, [0, 1].
    pub keyword: f64,
    /// Structural metadata boosts, capped at 1.0.
    pub metadata: f64,
    /// Context-aware score (contextual retrieval only, 0.0 otherwise).
    pub context: f64,
    /// The score candidates are ranked by.
    pub score: f64,
}
