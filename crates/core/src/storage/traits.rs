use async_trait::async_trait;
use bytes::Bytes;

use crate::record::{PutAck, Record};

use super::{BlobError, Result};

/// Repository for record operations against the document store.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Gets a record by its ID.
    async fn get_record(&self, id: &str) -> Result<Option<Record>>;

    /// Returns every record in the store, in no particular order.
    async fn scan_records(&self) -> Result<Vec<Record>>;

    /// Writes a record unconditionally, replacing any record with the same ID.
    async fn put_record(&self, record: &Record) -> Result<PutAck>;

    /// Overwrites both mutable fields of a record, creating it if needed.
    /// Returns the record as stored after the write.
    async fn update_record(&self, id: &str, filename: &str, url: &str) -> Result<Record>;

    /// Deletes a record by its ID. Deleting a missing record is not an error.
    async fn delete_record(&self, id: &str) -> Result<()>;
}

/// Object storage for uploaded files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `content` under `key` with public-read visibility, replacing any
    /// existing object with the same key.
    async fn put_object(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> std::result::Result<(), BlobError>;

    /// Fetches the content stored under `key`.
    async fn get_object(&self, key: &str) -> std::result::Result<Bytes, BlobError>;

    /// Public URL under which `key` is served.
    fn public_url(&self, key: &str) -> String;
}
