//! Attribute codec for [`ObjectRecord`].
//!
//! Pure functions converting between the record and the store's attribute
//! map, plus the primary-key filter and table name. Testable without any
//! store access.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::{Item, KeyFilter, StorageError, PRIMARY_KEY};

use super::ObjectRecord;

/// Logical table name for the object entity type.
pub const TABLE_NAME: &str = "objects";

pub const ATTR_ID: &str = PRIMARY_KEY;
pub const ATTR_NAME: &str = "name";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Converts a record to its attribute map. Never fails for a well-formed
/// record; timestamps are serialized as RFC 3339 strings.
pub fn encode(record: &ObjectRecord) -> Item {
    let mut item = Item::new();
    item.insert(ATTR_ID.to_string(), record.id.to_string());
    item.insert(ATTR_NAME.to_string(), record.name.clone());
    item.insert(
        ATTR_CREATED_AT.to_string(),
        record.created_at.to_rfc3339(),
    );
    item.insert(
        ATTR_UPDATED_AT.to_string(),
        record.updated_at.to_rfc3339(),
    );
    item
}

/// Inverse of [`encode`].
///
/// The store signals "no such key" as an absent or empty result rather than
/// a distinct error; this function turns that ambiguity into an explicit
/// `NotFound`. An invalid identifier or unparsable timestamp is `Malformed`.
pub fn decode(item: Option<&Item>) -> Result<ObjectRecord, StorageError> {
    let item = match item {
        Some(item) if !item.is_empty() => item,
        _ => {
            return Err(StorageError::NotFound {
                entity_type: "Object",
                id: String::new(),
            })
        }
    };

    let id = get_uuid(item, ATTR_ID)?;
    if id.is_nil() {
        return Err(StorageError::Malformed(format!("nil {ATTR_ID}")));
    }

    Ok(ObjectRecord {
        id,
        name: get_string(item, ATTR_NAME)?,
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
        updated_at: get_datetime(item, ATTR_UPDATED_AT)?,
    })
}

/// Primary-key equality filter `{_id: id}` for point lookups and deletes.
pub fn key_filter(id: Uuid) -> KeyFilter {
    KeyFilter::new(PRIMARY_KEY, id.to_string())
}

fn get_string(item: &Item, key: &str) -> Result<String, StorageError> {
    item.get(key)
        .cloned()
        .ok_or_else(|| StorageError::Malformed(format!("missing attribute: {key}")))
}

fn get_uuid(item: &Item, key: &str) -> Result<Uuid, StorageError> {
    let raw = get_string(item, key)?;
    Uuid::parse_str(&raw)
        .map_err(|err| StorageError::Malformed(format!("invalid {key}: {err}")))
}

fn get_datetime(item: &Item, key: &str) -> Result<DateTime<Utc>, StorageError> {
    let raw = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| StorageError::Malformed(format!("invalid {key}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ObjectRecord {
        ObjectRecord {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap(),
            name: "sample object".to_string(),
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339("2024-01-16T08:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let item = encode(&record);
        let parsed = decode(Some(&item)).unwrap();

        assert_eq!(record, parsed);
    }

    #[test]
    fn test_encode_attribute_names() {
        let item = encode(&sample_record());

        assert_eq!(
            item.get("_id").unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(item.get("name").unwrap(), "sample object");
        assert!(item.contains_key("createdAt"));
        assert!(item.contains_key("updatedAt"));
        assert_eq!(item.len(), 4);
    }

    #[test]
    fn test_decode_absent_is_not_found() {
        assert!(matches!(
            decode(None),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_decode_empty_is_not_found() {
        let item = Item::new();
        assert!(matches!(
            decode(Some(&item)),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_decode_invalid_id_is_malformed() {
        let mut item = encode(&sample_record());
        item.insert("_id".to_string(), "not-a-uuid".to_string());

        assert!(matches!(
            decode(Some(&item)),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_nil_id_is_malformed() {
        let mut item = encode(&sample_record());
        item.insert("_id".to_string(), Uuid::nil().to_string());

        assert!(matches!(
            decode(Some(&item)),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_bad_timestamp_is_malformed() {
        let mut item = encode(&sample_record());
        item.insert("createdAt".to_string(), "yesterday".to_string());

        assert!(matches!(
            decode(Some(&item)),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_key_filter_targets_primary_key() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        let filter = key_filter(id);

        assert_eq!(filter.attribute, "_id");
        assert_eq!(filter.value, "550e8400-e29b-41d4-a716-446655440001");
    }
}
