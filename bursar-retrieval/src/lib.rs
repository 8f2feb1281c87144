//! # bursar-retrieval
//!
//! The query engine for the Bursar financial-aid QA core. Cache-fronted
//! orchestration over three retrieval strategies, merged by weighted
//! ensemble scoring.
//!
//! ## Architecture
//!
//! ```text
//! RagEngine
//! ├── QueryPreprocessor (normalize + domain-context injection)
//! ├── ResponseCache (LRU + TTL, blake3 fingerprints)
//! ├── HybridRetriever
//! │   ├── SimilarityIndex (external collaborator seam)
//! │   ├── KeywordIndex (pattern-extracted tokens)
//! │   ├── MetadataIndex (document_type / chunk_type buckets)
//! │   ├── QueryExpander (suffix augmentation + synonyms)
//! │   └── Scorers (semantic, keyword, metadata, context)
//! └── PerformanceMonitor (counters + efficiency grade)
//! ```

pub mod cache;
pub mod engine;
pub mod expansion;
pub mod index;
pub mod monitor;
pub mod preprocess;
pub mod ranking;
pub mod retriever;

pub use cache::ResponseCache;
pub use engine::RagEngine;
pub use expansion::QueryExpander;
pub use index::IndexSet;
pub use monitor::PerformanceMonitor;
pub use preprocess::QueryPreprocessor;
pub use retriever::HybridRetriever;
