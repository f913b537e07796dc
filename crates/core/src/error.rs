//! Failure taxonomy shared by every handler.
//!
//! Each store-backed variant names the operation that failed and carries the
//! underlying store error; the cause itself (network, throttling,
//! permissions) is not distinguished.

use thiserror::Error;

use crate::storage::{BlobError, RepositoryError};

/// Errors surfaced by record and upload operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] BlobError),
    #[error("Registration failed: {0}")]
    RegistrationFailed(#[source] RepositoryError),
    #[error("Update failed: {0}")]
    UpdateFailed(#[source] RepositoryError),
    #[error("Deletion failed: {0}")]
    DeletionFailed(#[source] RepositoryError),
    #[error("Read failed: {0}")]
    ReadFailed(#[source] RepositoryError),
}

impl HandlerError {
    /// HTTP status code for this error.
    ///
    /// - `MalformedRequest` -> 400 (Bad Request)
    /// - everything else -> 500 (Internal Server Error)
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MalformedRequest(_) => 400,
            HandlerError::StorageUnavailable(_)
            | HandlerError::RegistrationFailed(_)
            | HandlerError::UpdateFailed(_)
            | HandlerError::DeletionFailed(_)
            | HandlerError::ReadFailed(_) => 500,
        }
    }

    /// The underlying error message without the operation prefix.
    pub fn detail(&self) -> String {
        match self {
            HandlerError::MalformedRequest(msg) => msg.clone(),
            HandlerError::StorageUnavailable(e) => e.to_string(),
            HandlerError::RegistrationFailed(e)
            | HandlerError::UpdateFailed(e)
            | HandlerError::DeletionFailed(e)
            | HandlerError::ReadFailed(e) => e.to_string(),
        }
    }
}

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_request_maps_to_400() {
        let error = HandlerError::MalformedRequest("no boundary".to_string());
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let repo = RepositoryError::QueryFailed("boom".to_string());
        assert_eq!(HandlerError::RegistrationFailed(repo.clone()).status_code(), 500);
        assert_eq!(HandlerError::UpdateFailed(repo.clone()).status_code(), 500);
        assert_eq!(HandlerError::DeletionFailed(repo.clone()).status_code(), 500);
        assert_eq!(HandlerError::ReadFailed(repo).status_code(), 500);

        let blob = BlobError::NotFound("a.png".to_string());
        assert_eq!(HandlerError::StorageUnavailable(blob).status_code(), 500);
    }

    #[test]
    fn test_detail_strips_operation_prefix() {
        let error =
            HandlerError::UpdateFailed(RepositoryError::QueryFailed("Table not found".to_string()));
        assert_eq!(error.to_string(), "Update failed: Query failed: Table not found");
        assert_eq!(error.detail(), "Query failed: Table not found");
    }
}
