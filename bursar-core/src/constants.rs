//! Metadata tag vocabulary shared across indexing and scoring.

/// Primary category tag axis on a document.
pub const TAG_DOCUMENT_TYPE: &str = "document_type";

/// Structural chunk-type tag axis on a document.
pub const TAG_CHUNK_TYPE: &str = "chunk_type";

/// Marker tag for key/salient sentences (value `"true"` when set).
pub const TAG_KEY_SENTENCE: &str = "key_sentence";

/// Fallback bucket for missing or unknown tags.
pub const GENERAL_BUCKET: &str = "general";

/// Chunk type produced by hierarchical splitting.
pub const CHUNK_HIERARCHICAL: &str = "hierarchical";

/// Document type for grant and financial-aid material.
pub const DOC_TYPE_FINANCIAL_AID: &str = "financial_aid";

/// Document type for loan program material.
pub const DOC_TYPE_LOAN_INFORMATION: &str = "loan_information";

/// Document type for application and verification material.
pub const DOC_TYPE_APPLICATION_PROCESS: &str = "application_process";
