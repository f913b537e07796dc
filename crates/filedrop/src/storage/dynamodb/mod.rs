//! DynamoDB records table.
//!
//! One item per record, keyed by the `id` string hash key. Item attributes
//! are `id`, `filenamedb` and `urldb`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRecordRepository;
