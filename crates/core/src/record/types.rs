use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A persisted filename/URL pair keyed by a unique identifier.
///
/// The serialized attribute names (`filenamedb`, `urldb`) are the ones stored
/// in the table and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "filenamedb")]
    pub filename: String,
    #[serde(rename = "urldb")]
    pub url: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            url: url.into(),
        }
    }
}

/// Acknowledgment returned by the document store for a put.
///
/// Puts never ask for the previous item back, so this serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutAck {}

/// A file pulled out of a multipart body. Lives only for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Bytes,
    /// The part's own `Content-Type` header, if it had one.
    pub content_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_table_attribute_names() {
        let record = Record::new("req-1", "a.png", "https://bucket.s3.amazonaws.com/a.png");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "req-1",
                "filenamedb": "a.png",
                "urldb": "https://bucket.s3.amazonaws.com/a.png",
            })
        );
    }

    #[test]
    fn test_put_ack_is_empty_object() {
        assert_eq!(serde_json::to_string(&PutAck::default()).unwrap(), "{}");
    }
}
