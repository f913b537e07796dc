mod error;
mod traits;

pub use error::{BlobError, RepositoryError, Result};
pub use traits::{BlobStore, RecordRepository};
