//! Stores that fail every call, for driving handler error paths.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use filedrop_core::record::{PutAck, Record};
use filedrop_core::storage::{BlobError, BlobStore, RecordRepository, RepositoryError, Result};

use crate::storage::{InMemoryBlobStore, InMemoryRecordRepository};
use crate::AppState;

pub const BUCKET: &str = "media";
pub const FAILURE: &str = "DynamoDB internal server error";

pub struct FailingRecords;

fn failure() -> RepositoryError {
    RepositoryError::QueryFailed(FAILURE.to_string())
}

#[async_trait]
impl RecordRepository for FailingRecords {
    async fn get_record(&self, _id: &str) -> Result<Option<Record>> {
        Err(failure())
    }

    async fn scan_records(&self) -> Result<Vec<Record>> {
        Err(failure())
    }

    async fn put_record(&self, _record: &Record) -> Result<PutAck> {
        Err(failure())
    }

    async fn update_record(&self, _id: &str, _filename: &str, _url: &str) -> Result<Record> {
        Err(failure())
    }

    async fn delete_record(&self, _id: &str) -> Result<()> {
        Err(failure())
    }
}

pub struct FailingBlobs;

#[async_trait]
impl BlobStore for FailingBlobs {
    async fn put_object(
        &self,
        key: &str,
        _content: Bytes,
        _content_type: Option<&str>,
    ) -> std::result::Result<(), BlobError> {
        Err(BlobError::PutFailed {
            key: key.to_string(),
            reason: "Access Denied".to_string(),
        })
    }

    async fn get_object(&self, key: &str) -> std::result::Result<Bytes, BlobError> {
        Err(BlobError::NotFound(key.to_string()))
    }

    fn public_url(&self, key: &str) -> String {
        filedrop_core::upload::public_url(BUCKET, key)
    }
}

/// State whose record calls all fail.
pub fn failing_records_state() -> AppState {
    AppState::new(
        Arc::new(FailingRecords),
        Arc::new(InMemoryBlobStore::new(BUCKET)),
    )
}

/// State whose blob writes all fail.
pub fn failing_blobs_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryRecordRepository::new()),
        Arc::new(FailingBlobs),
    )
}

/// Multipart body with one file part.
pub fn multipart_body(boundary: &str, filename: &str, content: &str) -> String {
    format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\
         \r\n\
         {content}\r\n\
         --{boundary}--\r\n"
    )
}
