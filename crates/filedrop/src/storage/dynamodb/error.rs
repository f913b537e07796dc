//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `filedrop_core::storage`.
//! Transport failures become `ConnectionFailed`; every service error is a
//! `QueryFailed` with a readable message.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use filedrop_core::storage::RepositoryError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded, please retry";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded, please retry";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";

/// Returns `ConnectionFailed` when the request never got a response.
fn transport_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: std::error::Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

fn query_failed(message: &str) -> RepositoryError {
    RepositoryError::QueryFailed(message.to_string())
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(e) = transport_error(&err) {
        return e;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        GetItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        GetItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!(
            "GetItem failed: {}",
            DisplayErrorContext(&err)
        )),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(e) = transport_error(&err) {
        return e;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        ScanError::ProvisionedThroughputExceededException(_) => query_failed(THROUGHPUT_EXCEEDED),
        ScanError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        ScanError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!("Scan failed: {}", DisplayErrorContext(&err))),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(e) = transport_error(&err) {
        return e;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        PutItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            query_failed("Transaction conflict, please retry")
        }
        PutItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!(
            "PutItem failed: {}",
            DisplayErrorContext(&err)
        )),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    if let Some(e) = transport_error(&err) {
        return e;
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        UpdateItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed("Item collection size limit exceeded")
        }
        UpdateItemError::TransactionConflictException(_) => {
            query_failed("Transaction conflict, please retry")
        }
        UpdateItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!(
            "UpdateItem failed: {}",
            DisplayErrorContext(&err)
        )),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(e) = transport_error(&err) {
        return e;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        DeleteItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        DeleteItemError::TransactionConflictException(_) => {
            query_failed("Transaction conflict, please retry")
        }
        DeleteItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!(
            "DeleteItem failed: {}",
            DisplayErrorContext(&err)
        )),
    }
}
