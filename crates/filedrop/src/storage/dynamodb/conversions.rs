//! Pure functions for converting between DynamoDB items and records.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use filedrop_core::record::Record;
use filedrop_core::storage::RepositoryError;

pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_ID: &str = "id";
pub const ATTR_FILENAME: &str = "filenamedb";
pub const ATTR_URL: &str = "urldb";

/// Update expression overwriting both mutable fields.
pub const UPDATE_EXPRESSION: &str = "SET filenamedb = :filenamedb, urldb = :urldb";

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a Record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> Item {
    let mut item = HashMap::new();
    item.insert(ATTR_ID.to_string(), AttributeValue::S(record.id.clone()));
    item.insert(
        ATTR_FILENAME.to_string(),
        AttributeValue::S(record.filename.clone()),
    );
    item.insert(ATTR_URL.to_string(), AttributeValue::S(record.url.clone()));
    item
}

/// Convert a DynamoDB item to a Record.
pub fn item_to_record(item: &Item) -> Result<Record, RepositoryError> {
    Ok(Record {
        id: get_string(item, ATTR_ID)?,
        filename: get_string(item, ATTR_FILENAME)?,
        url: get_string(item, ATTR_URL)?,
    })
}

/// Primary key of a record.
pub fn record_key(id: &str) -> Item {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Values bound by [`UPDATE_EXPRESSION`].
pub fn update_values(filename: &str, url: &str) -> Item {
    HashMap::from([
        (
            ":filenamedb".to_string(),
            AttributeValue::S(filename.to_string()),
        ),
        (":urldb".to_string(), AttributeValue::S(url.to_string())),
    ])
}

// ============================================================================
// Scan pages
// ============================================================================

/// Records of one scan page.
///
/// An item that does not convert is logged and skipped so the rest of the
/// listing still comes back.
pub fn items_to_records(items: &[Item]) -> Vec<Record> {
    items
        .iter()
        .filter_map(|item| match item_to_record(item) {
            Ok(record) => Some(record),
            Err(e) => {
                let id = item.get(ATTR_ID).and_then(|v| v.as_s().ok());
                tracing::warn!(id = ?id, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}

/// Start key for the page after one that returned `last_evaluated_key`.
///
/// `None` means the scan is finished. DynamoDB local answers an empty map
/// on the last page, which also ends the scan.
pub fn next_start_key(last_evaluated_key: Option<Item>) -> Option<Item> {
    last_evaluated_key.filter(|key| !key.is_empty())
}

// ============================================================================
// Helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record::new("rec-1", "a.png", "https://media.s3.amazonaws.com/a.png")
    }

    #[test]
    fn test_record_item_uses_table_attribute_names() {
        let item = record_to_item(&sample_record());

        assert_eq!(item.len(), 3);
        assert_eq!(item["id"].as_s().unwrap(), "rec-1");
        assert_eq!(item["filenamedb"].as_s().unwrap(), "a.png");
        assert_eq!(
            item["urldb"].as_s().unwrap(),
            "https://media.s3.amazonaws.com/a.png"
        );
    }

    #[test]
    fn test_item_to_record() {
        let record = sample_record();
        let parsed = item_to_record(&record_to_item(&record)).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_item_missing_url_is_invalid_data() {
        let mut item = record_to_item(&sample_record());
        item.remove("urldb");

        let err = item_to_record(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: urldb".to_string())
        );
    }

    #[test]
    fn test_non_string_attribute_is_invalid_data() {
        let mut item = record_to_item(&sample_record());
        item.insert("filenamedb".to_string(), AttributeValue::N("7".to_string()));

        assert!(matches!(
            item_to_record(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_record_key_only_has_id() {
        let key = record_key("rec-1");
        assert_eq!(key.len(), 1);
        assert_eq!(key["id"].as_s().unwrap(), "rec-1");
    }

    #[test]
    fn test_items_to_records_skips_malformed_items() {
        let good = record_to_item(&sample_record());
        let mut missing_url = record_to_item(&Record::new("rec-2", "b.png", "x"));
        missing_url.remove("urldb");
        let mut numeric_id = record_to_item(&Record::new("rec-3", "c.png", "y"));
        numeric_id.insert("id".to_string(), AttributeValue::N("3".to_string()));

        let records = items_to_records(&[missing_url, good, numeric_id]);

        assert_eq!(records, vec![sample_record()]);
    }

    #[test]
    fn test_items_to_records_empty_page() {
        assert!(items_to_records(&[]).is_empty());
    }

    #[test]
    fn test_next_start_key_continues_from_last_key() {
        let key = record_key("rec-1");
        assert_eq!(next_start_key(Some(key.clone())), Some(key));
    }

    #[test]
    fn test_next_start_key_stops_on_missing_or_empty_key() {
        assert_eq!(next_start_key(None), None);
        assert_eq!(next_start_key(Some(Item::new())), None);
    }

    #[test]
    fn test_update_values_match_expression_placeholders() {
        let values = update_values("b.png", "https://x/b.png");

        for placeholder in values.keys() {
            assert!(UPDATE_EXPRESSION.contains(placeholder.as_str()));
        }
        assert_eq!(values[":filenamedb"].as_s().unwrap(), "b.png");
        assert_eq!(values[":urldb"].as_s().unwrap(), "https://x/b.png");
    }
}
