//! In-memory storage backends.
//!
//! Both stores keep their data in a HashMap wrapped in `Arc<RwLock<_>>`.
//! Nothing is persisted; clones share the same data.
//!
//! # Example
//!
//! ```rust,ignore
//! use filedrop::storage::inmemory::{InMemoryBlobStore, InMemoryRecordRepository};
//!
//! let records = InMemoryRecordRepository::new();
//! let blobs = InMemoryBlobStore::new("media");
//! ```

mod blobs;
mod records;

pub use blobs::InMemoryBlobStore;
pub use records::InMemoryRecordRepository;
