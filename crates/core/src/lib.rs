//! Functional core for filedrop.
//!
//! Domain types, storage traits, the multipart extractor and the record and
//! upload operations. Nothing in this crate talks to AWS; the `filedrop`
//! crate provides the concrete backends and the Lambda shell.

pub mod error;
pub mod operations;
pub mod record;
pub mod storage;
pub mod upload;

pub use error::{HandlerError, Result};
