//! S3 upload bucket.

mod error;
mod store;

pub use store::S3BlobStore;
