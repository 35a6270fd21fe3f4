//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shelf_core::storage::{
    Item, KeyFilter, Result, ScanCondition, StorageError, StoreClient, PRIMARY_KEY,
};

/// In-memory store backend for tests and local development.
///
/// One item map per table, keyed by the `_id` attribute, wrapped in
/// `Arc<RwLock<_>>` for thread-safe access. Data is not persisted and is
/// lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<String, HashMap<String, Item>>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn find_one(&self, table: &str, key: &KeyFilter) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .and_then(|items| items.get(&key.value))
            .cloned())
    }

    async fn find_all(&self, table: &str, condition: &ScanCondition) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|items| {
                items
                    .values()
                    .filter(|item| condition.matches(item))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn put(&self, table: &str, item: Item) -> Result<()> {
        let key = item
            .get(PRIMARY_KEY)
            .cloned()
            .ok_or_else(|| StorageError::Transport("item missing primary key".to_string()))?;

        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .insert(key, item);
        Ok(())
    }

    async fn delete(&self, table: &str, key: &KeyFilter) -> Result<()> {
        // Deleting an absent key succeeds, matching DynamoDB semantics.
        let mut tables = self.tables.write().await;
        if let Some(items) = tables.get_mut(table) {
            items.remove(&key.value);
        }
        Ok(())
    }
}
