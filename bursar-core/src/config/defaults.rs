// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.6;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;
pub const DEFAULT_RERANK_TOP_K: usize = 10;
pub const DEFAULT_ENSEMBLE_SIZE: usize = 3;
pub const DEFAULT_CONTEXT_WINDOW: usize = 5;
pub const DEFAULT_METADATA_BOOST: f64 = 1.5;

// --- Cache ---
pub const DEFAULT_CACHE_MAX_SIZE: usize = 128;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600; // 1 hour

// --- Preprocessing ---
/// Prepended to queries that mention none of the anchor terms.
pub const DEFAULT_CONTEXT_PHRASE: &str = "federal student aid";

/// Domain vocabulary used to decide whether a query needs the default
/// context phrase.
pub const DEFAULT_ANCHOR_TERMS: &[&str] = &[
    "pell grant",
    "direct loan",
    "federal student aid",
    "fafsa",
    "cost of attendance",
    "expected family contribution",
    "subsidized loan",
    "unsubsidized loan",
    "parent plus loan",
    "income-driven repayment",
    "forbearance",
    "deferment",
    "loan forgiveness",
    "loan",
    "grant",
    "scholarship",
];
