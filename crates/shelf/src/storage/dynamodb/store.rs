//! DynamoDB `StoreClient` implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use shelf_core::storage::{Item, KeyFilter, Result, ScanCondition, StoreClient};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
};

/// DynamoDB-backed store.
///
/// Holds a single shared client handle; the SDK's connection pooling is
/// reused across all requests.
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Creates a new store over the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StoreClient for DynamoStore {
    async fn find_one(&self, table: &str, key: &KeyFilter) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .key(key.attribute, AttributeValue::S(key.value.clone()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result
            .item
            .map(|attributes| attributes_to_item(&attributes))
            .transpose()
    }

    async fn find_all(&self, table: &str, condition: &ScanCondition) -> Result<Vec<Item>> {
        let ScanCondition::NonEmpty(attribute) = condition;

        // `name` is a DynamoDB reserved word, hence the attribute-name alias.
        let result = self
            .client
            .scan()
            .table_name(table)
            .filter_expression("#attr <> :empty")
            .expression_attribute_names("#attr", *attribute)
            .expression_attribute_values(":empty", AttributeValue::S(String::new()))
            .send()
            .await
            .map_err(map_scan_error)?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect()
    }

    async fn put(&self, table: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete(&self, table: &str, key: &KeyFilter) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table)
            .key(key.attribute, AttributeValue::S(key.value.clone()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
