//! Data model: documents, query contexts, responses, scored candidates.

mod candidate;
mod context;
mod document;
mod response;

pub use candidate::ScoredCandidate;
pub use context::QueryContext;
pub use document::Document;
pub use response::{Confidence, RagResponse, SourceRef};
