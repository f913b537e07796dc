//! One handler per Lambda binary.
//!
//! Handlers turn an [`ApiEvent`](crate::ApiEvent) into an
//! [`ApiResponse`](crate::ApiResponse). Each one keeps its own failure body
//! shape; see [`error`].

pub mod create;
pub mod delete;
pub mod error;
pub mod read;
pub mod update;
pub mod upload;

#[cfg(test)]
mod testing;

pub use create::create_record;
pub use delete::delete_record;
pub use error::UploadError;
pub use read::read_records;
pub use update::update_record;
pub use upload::upload_file;
