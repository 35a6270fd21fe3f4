//! Attribute conversions at the SDK edge.
//!
//! The codec works on the neutral all-string item representation; these
//! functions lift it to `AttributeValue` maps and back.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use shelf_core::storage::{Item, StorageError};

/// Lift a neutral item to a DynamoDB attribute map. All attributes in this
/// schema are string-typed.
pub fn item_to_attributes(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(key, value)| (key, AttributeValue::S(value)))
        .collect()
}

/// Lower a DynamoDB attribute map to the neutral item representation.
///
/// A non-string attribute means the table holds data this service never
/// wrote; that is schema drift, surfaced as `Malformed` rather than
/// silently skipped.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StorageError> {
    attributes
        .iter()
        .map(|(key, value)| {
            value
                .as_s()
                .map(|s| (key.clone(), s.clone()))
                .map_err(|_| StorageError::Malformed(format!("non-string attribute: {key}")))
        })
        .collect()
}
