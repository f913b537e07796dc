//! Storage backends for the traits in `filedrop_core::storage`.
//!
//! - [`dynamodb`]: records table backed by `aws-sdk-dynamodb`
//! - [`s3`]: upload bucket backed by `aws-sdk-s3`
//! - [`inmemory`]: map-backed stand-ins for both, used by tests and local runs

pub mod dynamodb;
pub mod inmemory;
pub mod s3;

pub use dynamodb::DynamoDbRecordRepository;
pub use inmemory::{InMemoryBlobStore, InMemoryRecordRepository};
pub use s3::S3BlobStore;
