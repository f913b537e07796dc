//! S3 error mapping.
//!
//! Maps AWS SDK errors to `BlobError` from `filedrop_core::storage`.

use std::fmt::Debug;

use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use filedrop_core::storage::BlobError;

/// Map a PutObject SDK error to BlobError.
pub fn map_put_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutObjectError, R>,
    key: &str,
) -> BlobError {
    BlobError::PutFailed {
        key: key.to_string(),
        reason: DisplayErrorContext(&err).to_string(),
    }
}

/// Map a GetObject SDK error to BlobError.
pub fn map_get_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetObjectError, R>,
    key: &str,
) -> BlobError {
    let reason = DisplayErrorContext(&err).to_string();
    match err.into_service_error() {
        GetObjectError::NoSuchKey(_) => BlobError::NotFound(key.to_string()),
        _ => BlobError::GetFailed {
            key: key.to_string(),
            reason,
        },
    }
}
