use thiserror::Error;

/// Errors that can occur during document store operations.
///
/// Network, throttling and permission failures all end up here without
/// further distinction; callers only see a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors that can occur during blob store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlobError {
    #[error("Failed to store object {key}: {reason}")]
    PutFailed { key: String, reason: String },
    #[error("Failed to fetch object {key}: {reason}")]
    GetFailed { key: String, reason: String },
    #[error("Object not found: {0}")]
    NotFound(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
