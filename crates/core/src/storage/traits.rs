use async_trait::async_trait;

use super::{Item, KeyFilter, Result, ScanCondition};

/// Thin, entity-agnostic transport over the store's item primitives.
///
/// Implementations perform a single synchronous round-trip per call. They do
/// no business validation and no retries; every failure is reported as
/// [`StorageError::Transport`](super::StorageError::Transport) for callers
/// to propagate.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Point read by primary-key filter. A missing item is `Ok(None)`,
    /// never an error.
    async fn find_one(&self, table: &str, key: &KeyFilter) -> Result<Option<Item>>;

    /// Filtered scan over the whole table.
    async fn find_all(&self, table: &str, condition: &ScanCondition) -> Result<Vec<Item>>;

    /// Full-item upsert. Either all attributes are stored or the call fails.
    async fn put(&self, table: &str, item: Item) -> Result<()>;

    /// Point delete by primary-key filter. Deleting an absent key succeeds.
    async fn delete(&self, table: &str, key: &KeyFilter) -> Result<()>;
}
