//! Upload file handler.
//!
//! Extracts the first file of a multipart body, stores it in the bucket and
//! registers a record pointing at it. The record is keyed by the
//! invocation's request ID.

use anyhow::Context;

use filedrop_core::operations::upload_and_register;
use filedrop_core::record::UploadResponse;
use filedrop_core::upload::extract_file;

use super::error::UploadError;
use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;

const CONTENT_TYPE: &str = "content-type";

/// Uploads the file and answers `{"link": url}`.
pub async fn upload_file(state: &AppState, event: ApiEvent) -> ApiResponse {
    match upload(state, event).await {
        Ok(body) => ApiResponse::ok(&body),
        Err(e) => e.into_response(),
    }
}

async fn upload(state: &AppState, event: ApiEvent) -> Result<UploadResponse, UploadError> {
    let file = extract_file(event.body.clone(), event.header(CONTENT_TYPE))
        .await
        .context("No se encontró el archivo en el cuerpo del evento.")?;
    let filename = file.filename.clone();

    let upload = upload_and_register(
        state.blobs.as_ref(),
        state.records.as_ref(),
        &event.request_id,
        file,
    )
    .await
    .with_context(|| format!("Failed to upload {filename}"))?;

    tracing::info!(
        id = %upload.registration.id,
        filename = %filename,
        link = %upload.link,
        "Upload complete"
    );

    Ok(UploadResponse { link: upload.link })
}
