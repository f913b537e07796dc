//! Response bodies written into the `{ statusCode, body }` envelope.
//!
//! Field names are the wire names clients already depend on, including the
//! capitalized `Item`/`Items`/`Count` keys of read responses.

use serde::{Deserialize, Serialize};

use super::types::{PutAck, Record};

/// Success body for record creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub result: PutAck,
}

/// Success body for record updates. `oldRecord` is omitted when there was no
/// prior value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_record: Option<Record>,
    pub updated_record: Record,
}

/// Success body for deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRecordResponse {
    pub message: String,
}

impl DeleteRecordResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

/// Body for a single-record read. Serializes as `{}` when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRecordResponse {
    #[serde(rename = "Item", default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Record>,
}

/// Body for a full listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecordsResponse {
    #[serde(rename = "Items")]
    pub items: Vec<Record>,
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "ScannedCount")]
    pub scanned_count: usize,
}

impl From<Vec<Record>> for ScanRecordsResponse {
    fn from(items: Vec<Record>) -> Self {
        let count = items.len();
        Self {
            items,
            count,
            scanned_count: count,
        }
    }
}

/// Success body for uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub link: String,
}

/// Failure body used by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    pub error: String,
    pub detalle: String,
}

impl FailureDetail {
    /// Message shared by create and update failures.
    pub const WRITE_FAILED: &'static str = "No se pudo agregar el item,";

    pub fn write_failed(detail: impl Into<String>) -> Self {
        Self {
            error: Self::WRITE_FAILED.to_string(),
            detalle: detail.into(),
        }
    }
}

/// Failure body used by delete and upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_response_omits_absent_old_record() {
        let response = UpdateRecordResponse {
            old_record: None,
            updated_record: Record::new("1", "f", "u"),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "updatedRecord": { "id": "1", "filenamedb": "f", "urldb": "u" } })
        );
    }

    #[test]
    fn test_update_response_includes_old_record() {
        let response = UpdateRecordResponse {
            old_record: Some(Record::new("1", "old", "old-url")),
            updated_record: Record::new("1", "new", "new-url"),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["oldRecord"]["filenamedb"], "old");
        assert_eq!(value["updatedRecord"]["filenamedb"], "new");
    }

    #[test]
    fn test_get_response_empty_when_missing() {
        let response = GetRecordResponse { item: None };
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }

    #[test]
    fn test_scan_response_counts() {
        let response = ScanRecordsResponse::from(vec![
            Record::new("1", "a", "u1"),
            Record::new("2", "b", "u2"),
        ]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["Count"], 2);
        assert_eq!(value["ScannedCount"], 2);
        assert_eq!(value["Items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_detail_shape() {
        let body = FailureDetail::write_failed("Throughput exceeded");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "error": "No se pudo agregar el item,", "detalle": "Throughput exceeded" })
        );
    }

    #[test]
    fn test_delete_response_message() {
        assert_eq!(
            serde_json::to_string(&DeleteRecordResponse::deleted()).unwrap(),
            r#"{"message":"Deleted"}"#
        );
    }
}
