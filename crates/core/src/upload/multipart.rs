//! Pulls the first file out of a `multipart/form-data` body.
//!
//! Only the first part is looked at; any further parts are ignored.

use std::convert::Infallible;

use bytes::Bytes;
use futures_util::stream;
use multer::Multipart;

use crate::error::{HandlerError, Result};
use crate::record::UploadedFile;

/// Extract the first part's filename and content from `body`.
///
/// `content_type` is the request's `Content-Type` header, which must carry
/// the multipart boundary. Fails with [`HandlerError::MalformedRequest`] when
/// the boundary is missing, the body has no parts, or the first part has no
/// filename or no content.
pub async fn extract_file(body: Bytes, content_type: Option<&str>) -> Result<UploadedFile> {
    let content_type = content_type
        .ok_or_else(|| malformed("missing content-type header"))?;
    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| malformed(format!("no multipart boundary in content-type: {e}")))?;

    let body_stream = stream::once(async move { Ok::<Bytes, Infallible>(body) });
    let mut multipart = Multipart::new(body_stream, boundary);

    let field = multipart
        .next_field()
        .await
        .map_err(|e| malformed(format!("unreadable multipart body: {e}")))?
        .ok_or_else(|| malformed("multipart body contains no parts"))?;

    let filename = field
        .file_name()
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| malformed("first part has no filename"))?;
    let part_content_type = field.content_type().map(|mime| mime.to_string());

    let content = field
        .bytes()
        .await
        .map_err(|e| malformed(format!("unreadable part content: {e}")))?;
    if content.is_empty() {
        return Err(malformed("first part has no content"));
    }

    tracing::debug!(filename = %filename, size = content.len(), "Extracted file from multipart body");

    Ok(UploadedFile {
        filename,
        content,
        content_type: part_content_type,
    })
}

fn malformed(message: impl Into<String>) -> HandlerError {
    HandlerError::MalformedRequest(message.into())
}
