//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::scan::builders::ScanFluentBuilder;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use filedrop_core::record::{PutAck, Record};
use filedrop_core::storage::{RecordRepository, RepositoryError, Result};

use super::conversions::{
    item_to_record, items_to_records, next_start_key, record_key, record_to_item,
    update_values, Item, ATTR_ID, UPDATE_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// Records table backed by DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoDbRecordRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRecordRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Scan request for the page starting at `start_key`.
    fn scan_page(&self, start_key: Option<Item>) -> ScanFluentBuilder {
        self.client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start_key)
    }
}

#[async_trait]
impl RecordRepository for DynamoDbRecordRepository {
    async fn get_record(&self, id: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_record(&item)?)),
            None => Ok(None),
        }
    }

    /// Every record in the table, following `LastEvaluatedKey` across pages.
    ///
    /// Malformed items are skipped with a warning rather than failing the
    /// listing.
    async fn scan_records(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let page = self
                .scan_page(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            records.extend(items_to_records(page.items()));

            start_key = next_start_key(page.last_evaluated_key);
            if start_key.is_none() {
                break;
            }
        }

        Ok(records)
    }

    async fn put_record(&self, record: &Record) -> Result<PutAck> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(PutAck::default())
    }

    async fn update_record(&self, id: &str, filename: &str, url: &str) -> Result<Record> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(record_key(id)))
            .update_expression(UPDATE_EXPRESSION)
            .set_expression_attribute_values(Some(update_values(filename, url)))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::InvalidData(format!("UpdateItem returned no attributes for {}", id))
        })?;
        item_to_record(&attributes)
    }

    async fn delete_record(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(record_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
