use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted domain entity.
///
/// `id` is assigned by the service on creation and immutable afterwards;
/// `created_at` is set once, `updated_at` is refreshed on every update.
/// Both timestamps are clock-stamped by the repository, not by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ObjectRecord {
    /// Creates a new record with a fresh identifier.
    ///
    /// The timestamps are placeholders; `ObjectRepository::create` stamps
    /// them from its clock before the record is persisted.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific ID for this record (useful for testing and updates).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
