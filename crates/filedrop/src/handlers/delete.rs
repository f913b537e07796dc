//! Delete record handler.

use filedrop_core::operations;
use filedrop_core::record::DeleteRecordResponse;
use filedrop_core::Result;

use super::error::{message_failure, require_id};
use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;

/// Deletes the record named by the `id` query parameter.
pub async fn delete_record(state: &AppState, event: ApiEvent) -> ApiResponse {
    match delete(state, &event).await {
        Ok(()) => ApiResponse::ok(&DeleteRecordResponse::deleted()),
        Err(e) => message_failure(&e),
    }
}

async fn delete(state: &AppState, event: &ApiEvent) -> Result<()> {
    let id = require_id(event)?;
    operations::delete_record(state.records.as_ref(), id).await
}
