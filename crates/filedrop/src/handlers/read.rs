//! Read/list records handler.

use filedrop_core::operations::{self, ReadResult};
use filedrop_core::record::{GetRecordResponse, ScanRecordsResponse};
use filedrop_core::HandlerError;

use super::error::ID_PARAM;
use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;

/// Returns the record named by the `id` query parameter as `{"Item": ..}`,
/// or every record as `{"Items", "Count", "ScannedCount"}` when no `id` is
/// given.
///
/// Store failures are returned as `Err` instead of a response body, so the
/// runtime records a failed invocation.
pub async fn read_records(state: &AppState, event: ApiEvent) -> Result<ApiResponse, HandlerError> {
    let id = event.query_param(ID_PARAM).filter(|id| !id.is_empty());

    let result = operations::read_records(state.records.as_ref(), id)
        .await
        .inspect_err(|e| tracing::error!(id = ?id, error = %e, "Read failed"))?;

    let response = match result {
        ReadResult::One(item) => ApiResponse::ok(&GetRecordResponse { item }),
        ReadResult::All(records) => ApiResponse::ok(&ScanRecordsResponse::from(records)),
    };
    Ok(response)
}
