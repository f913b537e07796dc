//! Update record handler.

use filedrop_core::operations;
use filedrop_core::record::{RecordFields, UpdateRecordResponse};
use filedrop_core::Result;

use super::error::{require_id, write_failure};
use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;

/// Overwrites the record named by the `id` query parameter with the
/// `{filenamedb, urldb}` body and returns the prior and new values.
pub async fn update_record(state: &AppState, event: ApiEvent) -> ApiResponse {
    match update(state, &event).await {
        Ok(body) => ApiResponse::ok(&body),
        Err(e) => write_failure(&e),
    }
}

async fn update(state: &AppState, event: &ApiEvent) -> Result<UpdateRecordResponse> {
    let id = require_id(event)?;
    let fields = RecordFields::from_json(&event.body)?;
    operations::update_record(state.records.as_ref(), id, fields).await
}

#[cfg(test)]
mod tests {
    use filedrop_core::record::Record;

    use super::*;
    use crate::handlers::testing::{failing_records_state, BUCKET};

    fn body(filename: &str) -> String {
        format!(r#"{{"filenamedb":"{filename}","urldb":"https://media.s3.amazonaws.com/{filename}"}}"#)
    }

    #[tokio::test]
    async fn test_update_existing_record_returns_old_and_new() {
        let state = AppState::in_memory(BUCKET);
        let old = Record::new("r1", "a.png", "https://media.s3.amazonaws.com/a.png");
        state.records.put_record(&old).await.unwrap();

        let response = update_record(
            &state,
            ApiEvent::new("req").with_query("id", "r1").with_body(body("b.png")),
        )
        .await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json().unwrap(),
            serde_json::json!({
                "oldRecord": {
                    "id": "r1",
                    "filenamedb": "a.png",
                    "urldb": "https://media.s3.amazonaws.com/a.png",
                },
                "updatedRecord": {
                    "id": "r1",
                    "filenamedb": "b.png",
                    "urldb": "https://media.s3.amazonaws.com/b.png",
                },
            })
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_omits_old_record() {
        let state = AppState::in_memory(BUCKET);

        let response = update_record(
            &state,
            ApiEvent::new("req").with_query("id", "new").with_body(body("c.png")),
        )
        .await;

        assert_eq!(response.status_code, 200);
        let json = response.body_json().unwrap();
        assert!(json.get("oldRecord").is_none());
        assert_eq!(json["updatedRecord"]["filenamedb"], "c.png");
    }

    #[tokio::test]
    async fn test_update_without_id_is_400() {
        let state = AppState::in_memory(BUCKET);

        let response = update_record(&state, ApiEvent::new("req").with_body(body("c.png"))).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body_json().unwrap(),
            serde_json::json!({
                "error": "No se pudo agregar el item,",
                "detalle": "missing id query parameter",
            })
        );
        assert!(state.records.scan_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_store_failure_is_500() {
        let state = failing_records_state();

        let response = update_record(
            &state,
            ApiEvent::new("req").with_query("id", "r1").with_body(body("b.png")),
        )
        .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap()["error"],
            "No se pudo agregar el item,"
        );
    }
}
