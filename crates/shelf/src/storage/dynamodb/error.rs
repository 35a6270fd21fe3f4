//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StorageError::Transport`. This layer never
//! retries and never distinguishes beyond "the store call failed"; the only
//! store condition with its own meaning (a missing item) is a successful
//! empty response, handled by the codec.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;

use shelf_core::storage::StorageError;

/// Map a GetItem SDK error to StorageError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StorageError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            StorageError::Transport("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Transport("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StorageError::Transport("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StorageError::Transport("DynamoDB internal server error".to_string())
        }
        err => StorageError::Transport(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to StorageError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> StorageError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            StorageError::Transport("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            StorageError::Transport("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StorageError::Transport("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            StorageError::Transport("DynamoDB internal server error".to_string())
        }
        err => StorageError::Transport(format!("Scan failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StorageError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StorageError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StorageError::Transport("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Transport("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StorageError::Transport("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StorageError::Transport("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StorageError::Transport("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StorageError::Transport("DynamoDB internal server error".to_string())
        }
        err => StorageError::Transport(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StorageError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StorageError {
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StorageError::Transport("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Transport("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StorageError::Transport("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            StorageError::Transport("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StorageError::Transport("DynamoDB internal server error".to_string())
        }
        err => StorageError::Transport(format!("DeleteItem failed: {:?}", err)),
    }
}
