//! Configuration structs with documented defaults.
//!
//! Validation happens once, at engine construction, never per call.

pub mod defaults;

mod cache_config;
mod preprocess_config;
mod retrieval_config;

pub use cache_config::CacheConfig;
pub use preprocess_config::PreprocessConfig;
pub use retrieval_config::RetrievalConfig;
