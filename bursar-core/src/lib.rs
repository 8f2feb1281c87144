//! # bursar-core
//!
//! Foundation crate for the Bursar financial-aid retrieval core.
//! Defines the document model, collaborator traits, errors, config, and
//! constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CacheConfig, PreprocessConfig, RetrievalConfig};
pub use errors::{RetrievalError, RetrievalResult};
pub use models::{Confidence, Document, QueryContext, RagResponse, ScoredCandidate, SourceRef};
pub use traits::SimilaritySearch;
