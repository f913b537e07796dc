//! State shared by every invocation of a handler.
//!
//! Built once at cold start from [`Config`] and cloned into each invocation.
//! Storage is held as trait objects so handlers run unchanged against the
//! AWS backends or the in-memory ones.

use std::sync::Arc;

use filedrop_core::storage::{BlobStore, RecordRepository};

use crate::config::Config;
use crate::storage::{
    DynamoDbRecordRepository, InMemoryBlobStore, InMemoryRecordRepository, S3BlobStore,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Records table.
    pub records: Arc<dyn RecordRepository>,
    /// Upload bucket.
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    /// Creates an AppState from already-built stores.
    pub fn new(records: Arc<dyn RecordRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { records, blobs }
    }

    /// Creates AppState with DynamoDB and S3 clients built from `config`.
    ///
    /// When `endpoint_url` is set both clients target it, and S3 uses
    /// path-style addressing as local emulators require.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        let dynamodb_client = aws_sdk_dynamodb::Client::new(&sdk_config);

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config);

        tracing::debug!(
            table = %config.table_name,
            bucket = %config.bucket_name,
            region = %config.region,
            "Storage clients created"
        );

        Self::new(
            Arc::new(DynamoDbRecordRepository::new(
                dynamodb_client,
                &config.table_name,
            )),
            Arc::new(S3BlobStore::new(s3_client, &config.bucket_name)),
        )
    }

    /// Creates AppState with in-memory storage.
    /// Useful for testing without any external dependencies.
    pub fn in_memory(bucket: &str) -> Self {
        Self::new(
            Arc::new(InMemoryRecordRepository::new()),
            Arc::new(InMemoryBlobStore::new(bucket)),
        )
    }
}
