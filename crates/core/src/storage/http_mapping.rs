//! Pure functions for mapping storage errors to HTTP status codes.

use super::StorageError;

/// Maps a [`StorageError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Malformed` -> 500 (Internal Server Error)
/// - `Transport` -> 503 (Service Unavailable)
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::NotFound { .. } => 404,
        StorageError::Malformed(_) => 500,
        StorageError::Transport(_) => 503,
    }
}
