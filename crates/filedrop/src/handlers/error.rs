//! Failure bodies.
//!
//! - create, update: `{ error, detalle }`
//! - delete: `{ message }`
//! - upload: `{ message }` holding the whole error chain
//!
//! For create, update and delete `MalformedRequest` answers 400 and every
//! other failure 500. Upload failures are always 500.

use filedrop_core::record::{FailureDetail, MessageBody};
use filedrop_core::HandlerError;

use crate::event::{ApiEvent, ApiResponse};

/// Query parameter naming the record to act on.
pub const ID_PARAM: &str = "id";

/// `{ error, detalle }` body used by create and update.
pub fn write_failure(err: &HandlerError) -> ApiResponse {
    let status = err.status_code();
    tracing::error!(status, error = %err, "Record write failed");
    ApiResponse::json(status, &FailureDetail::write_failed(err.detail()))
}

/// `{ message }` body used by delete.
pub fn message_failure(err: &HandlerError) -> ApiResponse {
    let status = err.status_code();
    tracing::error!(status, error = %err, "Request failed");
    ApiResponse::json(status, &MessageBody::new(err.detail()))
}

/// The non-empty `id` query parameter.
pub fn require_id(event: &ApiEvent) -> Result<&str, HandlerError> {
    event
        .query_param(ID_PARAM)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| HandlerError::MalformedRequest("missing id query parameter".to_string()))
}

/// Upload failure carrying the full context chain.
///
/// Answers 500 whatever the cause, malformed bodies included.
#[derive(Debug)]
pub struct UploadError(pub anyhow::Error);

impl UploadError {
    pub const STATUS: u16 = 500;

    /// `{ message }` with every cause, as printed by `{:?}`.
    pub fn into_response(self) -> ApiResponse {
        tracing::error!(status = Self::STATUS, error = %self.0, "Upload failed");
        ApiResponse::json(Self::STATUS, &MessageBody::new(format!("{:?}", self.0)))
    }
}

impl<E> From<E> for UploadError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
