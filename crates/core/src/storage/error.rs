use thiserror::Error;

/// Errors surfaced by store backends and the object codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A point lookup found no item, or an update/remove target is absent.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A stored item could not be decoded: invalid identifier or timestamp.
    /// Indicates data corruption or schema drift, never defaulted over.
    #[error("Malformed item: {0}")]
    Malformed(String),
    /// A network or store-level failure on a store call. Never retried at
    /// this layer.
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = StorageError::NotFound {
            entity_type: "Object",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Object not found: abc-123");
    }

    #[test]
    fn test_malformed_display() {
        let error = StorageError::Malformed("invalid timestamp createdAt".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed item: invalid timestamp createdAt"
        );
    }

    #[test]
    fn test_transport_display() {
        let error = StorageError::Transport("connection reset".to_string());
        assert_eq!(error.to_string(), "Transport failure: connection reset");
    }
}
