use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Error rendering or reading JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input that does not describe a query document
    #[error("Invalid query document: {0}")]
    InvalidDocument(String),
}

/// Result type for query document operations
pub type Result<T> = std::result::Result<T, QueryError>;
