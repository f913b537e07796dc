//! Create record handler.

use filedrop_core::operations::register_record;
use filedrop_core::record::{CreateRecordResponse, RecordFields};
use filedrop_core::Result;

use super::error::write_failure;
use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;

/// Registers the `{filenamedb, urldb}` body as a new record keyed by the
/// invocation's request ID.
pub async fn create_record(state: &AppState, event: ApiEvent) -> ApiResponse {
    match create(state, &event).await {
        Ok(body) => ApiResponse::ok(&body),
        Err(e) => write_failure(&e),
    }
}

async fn create(state: &AppState, event: &ApiEvent) -> Result<CreateRecordResponse> {
    let fields = RecordFields::from_json(&event.body)?;
    let registration = register_record(state.records.as_ref(), &event.request_id, fields).await?;
    Ok(CreateRecordResponse {
        result: registration.result,
    })
}
