//! Record and upload operations written against the storage traits.
//!
//! Each function is one stateless request/response exchange. Stages run in
//! order and the first failure ends the operation; nothing is retried.

use crate::error::{HandlerError, Result};
use crate::record::{PutAck, Record, RecordFields, UpdateRecordResponse, UploadedFile};
use crate::storage::{BlobStore, RecordRepository};

/// Outcome of registering a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: String,
    pub result: PutAck,
}

/// Outcome of a read: one record looked up by ID, or the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    One(Option<Record>),
    All(Vec<Record>),
}

/// Outcome of the upload-then-register workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub link: String,
    pub registration: Registration,
}

/// Creates a record under a caller-supplied identifier.
///
/// The identifier is trusted to be unique; an existing record with the same
/// ID is overwritten.
pub async fn register_record(
    repo: &dyn RecordRepository,
    id: &str,
    fields: RecordFields,
) -> Result<Registration> {
    let record = fields.into_record(id);
    let result = repo
        .put_record(&record)
        .await
        .map_err(HandlerError::RegistrationFailed)?;

    tracing::info!(id = %record.id, filename = %record.filename, "Record registered");

    Ok(Registration {
        id: record.id,
        result,
    })
}

/// Overwrites both fields of a record and returns the prior and new values.
///
/// The prior value is read first and a failed read only means there is no
/// prior value. The read and the write are separate store calls: a concurrent
/// update landing between them is neither detected nor prevented.
pub async fn update_record(
    repo: &dyn RecordRepository,
    id: &str,
    fields: RecordFields,
) -> Result<UpdateRecordResponse> {
    let old_record = match repo.get_record(id).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "Could not read prior record, continuing");
            None
        }
    };

    let updated_record = repo
        .update_record(id, &fields.filenamedb, &fields.urldb)
        .await
        .map_err(HandlerError::UpdateFailed)?;

    tracing::info!(id = %id, had_prior = old_record.is_some(), "Record updated");

    Ok(UpdateRecordResponse {
        old_record,
        updated_record,
    })
}

/// Deletes a record. Missing records are not an error.
pub async fn delete_record(repo: &dyn RecordRepository, id: &str) -> Result<()> {
    repo.delete_record(id)
        .await
        .map_err(HandlerError::DeletionFailed)?;

    tracing::info!(id = %id, "Record deleted");
    Ok(())
}

/// Reads one record when `id` is given, otherwise every record.
pub async fn read_records(repo: &dyn RecordRepository, id: Option<&str>) -> Result<ReadResult> {
    match id {
        Some(id) => {
            let record = repo.get_record(id).await.map_err(HandlerError::ReadFailed)?;
            Ok(ReadResult::One(record))
        }
        None => {
            let records = repo.scan_records().await.map_err(HandlerError::ReadFailed)?;
            tracing::debug!(count = records.len(), "Scanned records");
            Ok(ReadResult::All(records))
        }
    }
}

/// Stores an uploaded file under its own filename and returns its public URL.
pub async fn store_file(blobs: &dyn BlobStore, file: &UploadedFile) -> Result<String> {
    blobs
        .put_object(
            &file.filename,
            file.content.clone(),
            file.content_type.as_deref(),
        )
        .await
        .map_err(HandlerError::StorageUnavailable)?;

    Ok(blobs.public_url(&file.filename))
}

/// Stores the file, then registers a record pointing at it under `id`.
///
/// The two steps are not transactional: if registration fails the object
/// stays in the blob store.
pub async fn upload_and_register(
    blobs: &dyn BlobStore,
    repo: &dyn RecordRepository,
    id: &str,
    file: UploadedFile,
) -> Result<Upload> {
    let link = store_file(blobs, &file).await?;
    tracing::info!(filename = %file.filename, link = %link, "File stored");

    let registration =
        register_record(repo, id, RecordFields::new(file.filename, link.clone())).await?;

    Ok(Upload { link, registration })
}
