//! Entity-level operations composing the codec with a store client.

use std::sync::Arc;

use uuid::Uuid;

use crate::clock::Clock;
use crate::storage::{Result, ScanCondition, StorageError, StoreClient};

use super::{codec, ObjectRecord};

/// Repository for object records.
///
/// Owns identity and timestamp management; the codec and store client stay
/// stateless. Every operation is a linear sequence of at most two store
/// round-trips. Update and remove are read-modify-write without optimistic
/// locking: two concurrent updates to the same id race, and the later write
/// wins wholesale (never a merged item).
pub struct ObjectRepository {
    store: Arc<dyn StoreClient>,
    clock: Arc<dyn Clock>,
}

impl ObjectRepository {
    pub fn new(store: Arc<dyn StoreClient>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Fetches a record by id.
    pub async fn describe_one(&self, id: Uuid) -> Result<ObjectRecord> {
        let item = self
            .store
            .find_one(codec::TABLE_NAME, &codec::key_filter(id))
            .await?;

        codec::decode(item.as_ref()).map_err(|err| match err {
            // The codec cannot know which key was looked up.
            StorageError::NotFound { entity_type, .. } => StorageError::NotFound {
                entity_type,
                id: id.to_string(),
            },
            other => other,
        })
    }

    /// Fetches every record whose `name` is non-empty (a liveness filter,
    /// not a real predicate). A decode failure on any item aborts the whole
    /// operation; no partial results are returned.
    pub async fn describe_all(&self) -> Result<Vec<ObjectRecord>> {
        let items = self
            .store
            .find_all(codec::TABLE_NAME, &ScanCondition::NonEmpty(codec::ATTR_NAME))
            .await?;

        items.iter().map(|item| codec::decode(Some(item))).collect()
    }

    /// Persists a new record and returns its caller-assigned id.
    ///
    /// Both timestamps are stamped from the clock; `updated_at` mirrors
    /// `created_at` at creation.
    pub async fn create(&self, mut record: ObjectRecord) -> Result<Uuid> {
        let now = self.clock.now();
        record.created_at = now;
        record.updated_at = now;

        self.store
            .put(codec::TABLE_NAME, codec::encode(&record))
            .await?;

        Ok(record.id)
    }

    /// Read-modify-write update: only `name` and `updated_at` change; `id`
    /// and `created_at` are carried over from the stored record.
    pub async fn update(&self, id: Uuid, record: &ObjectRecord) -> Result<()> {
        let mut existing = self.describe_one(id).await?;
        existing.name = record.name.clone();
        existing.updated_at = self.clock.now();

        self.store
            .put(codec::TABLE_NAME, codec::encode(&existing))
            .await
    }

    /// Read-then-delete, so removing a nonexistent id surfaces `NotFound`
    /// instead of silently succeeding.
    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let existing = self.describe_one(id).await?;

        self.store
            .delete(codec::TABLE_NAME, &codec::key_filter(existing.id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};

    use crate::storage::{Item, KeyFilter, PRIMARY_KEY};

    use super::*;

    /// Store fake keyed by the `_id` attribute, one map per table.
    #[derive(Default)]
    struct FakeStore {
        tables: Mutex<HashMap<String, HashMap<String, Item>>>,
    }

    #[async_trait]
    impl StoreClient for FakeStore {
        async fn find_one(&self, table: &str, key: &KeyFilter) -> Result<Option<Item>> {
            let tables = self.tables.lock().unwrap();
            Ok(tables
                .get(table)
                .and_then(|items| items.get(&key.value))
                .cloned())
        }

        async fn find_all(&self, table: &str, condition: &ScanCondition) -> Result<Vec<Item>> {
            let tables = self.tables.lock().unwrap();
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
            let mut tables = self.tables.lock().unwrap();
            tables.entry(table.to_string()).or_default().insert(key, item);
            Ok(())
        }

        async fn delete(&self, table: &str, key: &KeyFilter) -> Result<()> {
            let mut tables = self.tables.lock().unwrap();
            if let Some(items) = tables.get_mut(table) {
                items.remove(&key.value);
            }
            Ok(())
        }
    }

    impl FakeStore {
        fn insert_raw(&self, table: &str, key: &str, item: Item) {
            let mut tables = self.tables.lock().unwrap();
            tables
                .entry(table.to_string())
                .or_default()
                .insert(key.to_string(), item);
        }
    }

    /// Clock that advances only when told to.
    struct StepClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl StepClock {
        fn starting_at(now: DateTime<Utc>) -> Self {
            Self { now: Mutex::new(now) }
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn repository() -> (ObjectRepository, Arc<FakeStore>, Arc<StepClock>) {
        let store = Arc::new(FakeStore::default());
        let clock = Arc::new(StepClock::starting_at(t0()));
        let repository = ObjectRepository::new(store.clone(), clock.clone());
        (repository, store, clock)
    }

    #[tokio::test]
    async fn test_create_stamps_both_timestamps() {
        let (repository, _, _) = repository();

        let record = ObjectRecord::new("first object");
        let id = repository.create(record.clone()).await.unwrap();
        assert_eq!(id, record.id);

        let stored = repository.describe_one(id).await.unwrap();
        assert_eq!(stored.id, record.id);
        assert_eq!(stored.name, "first object");
        assert_eq!(stored.created_at, t0());
        assert_eq!(stored.updated_at, t0());
    }

    #[tokio::test]
    async fn test_describe_one_missing_is_not_found() {
        let (repository, _, _) = repository();

        let id = Uuid::new_v4();
        let err = repository.describe_one(id).await.unwrap_err();

        assert_eq!(
            err,
            StorageError::NotFound {
                entity_type: "Object",
                id: id.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let (repository, _, clock) = repository();

        let record = ObjectRecord::new("before");
        let id = repository.create(record).await.unwrap();

        clock.advance(Duration::seconds(90));
        repository
            .update(id, &ObjectRecord::new("after"))
            .await
            .unwrap();

        let stored = repository.describe_one(id).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "after");
        assert_eq!(stored.created_at, t0());
        assert_eq!(stored.updated_at, t0() + Duration::seconds(90));
        assert!(stored.updated_at > stored.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (repository, _, _) = repository();

        let err = repository
            .update(Uuid::new_v4(), &ObjectRecord::new("whatever"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_is_destructive_and_checked() {
        let (repository, _, _) = repository();

        let id = repository.create(ObjectRecord::new("doomed")).await.unwrap();
        repository.remove(id).await.unwrap();

        assert!(matches!(
            repository.describe_one(id).await,
            Err(StorageError::NotFound { .. })
        ));

        // Second remove hits the read-then-delete check.
        assert!(matches!(
            repository.remove(id).await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_describe_all_returns_every_record() {
        let (repository, _, _) = repository();

        repository.create(ObjectRecord::new("one")).await.unwrap();
        repository.create(ObjectRecord::new("two")).await.unwrap();

        let mut names: Vec<String> = repository
            .describe_all()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_describe_all_aborts_on_corrupt_item() {
        let (repository, store, _) = repository();

        repository.create(ObjectRecord::new("healthy")).await.unwrap();

        let mut corrupt = codec::encode(&ObjectRecord::new("corrupt"));
        corrupt.insert("createdAt".to_string(), "not-a-timestamp".to_string());
        let key = corrupt.get(PRIMARY_KEY).cloned().unwrap();
        store.insert_raw(codec::TABLE_NAME, &key, corrupt);

        assert!(matches!(
            repository.describe_all().await,
            Err(StorageError::Malformed(_))
        ));
    }
}
