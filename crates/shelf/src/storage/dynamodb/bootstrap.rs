//! Idempotent table provisioning.
//!
//! DynamoDB's `CreateTable` is asynchronous and non-transactional across
//! process restarts: a create can race a previous creation still in flight,
//! and the call fails with `ResourceInUseException` for both an existing
//! and an in-progress table. The bootstrap absorbs that race by retrying
//! the create on a fixed backoff until the table reports ready, within a
//! bounded attempt budget. It runs once at startup, before the service
//! accepts traffic.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
    TableStatus,
};
use aws_sdk_dynamodb::Client;
use thiserror::Error;

use shelf_core::storage::PRIMARY_KEY;

const READ_CAPACITY_UNITS: i64 = 10;
const WRITE_CAPACITY_UNITS: i64 = 10;

/// Retry settings for the create loop.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            backoff: Duration::from_secs(3),
        }
    }
}

/// Errors that halt startup.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Any create-table failure other than "already exists" or "still
    /// creating".
    #[error("Table provisioning failed: {0}")]
    Fatal(String),

    /// The table never left CREATING within the attempt budget.
    #[error("Table '{table_name}' not ready after {attempts} attempts")]
    NeverReady { table_name: String, attempts: u32 },
}

/// Outcome of one create attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableReadiness {
    /// The table exists and is usable (or the store reported it active).
    Ready,
    /// The table is still being created; retry after the backoff.
    Creating,
}

/// One create-table round-trip, abstracted so the retry loop is testable
/// without AWS.
#[async_trait]
pub(crate) trait TableApi: Send + Sync {
    async fn create_table(&self, table: &str) -> Result<TableReadiness, BootstrapError>;
}

/// Ensures the table exists with the `_id` hash-key schema before the
/// service starts serving. Safe to invoke against an existing table.
pub async fn ensure_table(
    client: &Client,
    table: &str,
    options: &BootstrapOptions,
) -> Result<(), BootstrapError> {
    ensure_table_with(&DynamoTableApi { client }, table, options).await
}

pub(crate) async fn ensure_table_with(
    api: &dyn TableApi,
    table: &str,
    options: &BootstrapOptions,
) -> Result<(), BootstrapError> {
    for attempt in 1..=options.max_attempts {
        match api.create_table(table).await? {
            TableReadiness::Ready => {
                tracing::info!(table, attempt, "Table ready");
                return Ok(());
            }
            TableReadiness::Creating => {
                tracing::debug!(table, attempt, "Table still creating, backing off");
                tokio::time::sleep(options.backoff).await;
            }
        }
    }

    Err(BootstrapError::NeverReady {
        table_name: table.to_string(),
        attempts: options.max_attempts,
    })
}

struct DynamoTableApi<'a> {
    client: &'a Client,
}

#[async_trait]
impl TableApi for DynamoTableApi<'_> {
    async fn create_table(&self, table: &str) -> Result<TableReadiness, BootstrapError> {
        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(PRIMARY_KEY)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| BootstrapError::Fatal(e.to_string()))?;

        let key_schema = KeySchemaElement::builder()
            .attribute_name(PRIMARY_KEY)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| BootstrapError::Fatal(e.to_string()))?;

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(READ_CAPACITY_UNITS)
            .write_capacity_units(WRITE_CAPACITY_UNITS)
            .build()
            .map_err(|e| BootstrapError::Fatal(e.to_string()))?;

        let result = self
            .client
            .create_table()
            .table_name(table)
            .attribute_definitions(attribute_definition)
            .key_schema(key_schema)
            .provisioned_throughput(throughput)
            .send()
            .await;

        match result {
            Ok(output) => Ok(readiness_from_status(
                output
                    .table_description
                    .and_then(|description| description.table_status),
            )),
            Err(err) => match err.into_service_error() {
                // Raised both for an existing table and for a creation
                // still in flight; describe to tell the two apart.
                CreateTableError::ResourceInUseException(_) => self.describe_readiness(table).await,
                other => Err(BootstrapError::Fatal(format!(
                    "CreateTable failed: {other:?}"
                ))),
            },
        }
    }
}

impl DynamoTableApi<'_> {
    async fn describe_readiness(&self, table: &str) -> Result<TableReadiness, BootstrapError> {
        match self.client.describe_table().table_name(table).send().await {
            Ok(output) => Ok(readiness_from_status(
                output.table.and_then(|description| description.table_status),
            )),
            Err(err) => match err.into_service_error() {
                // Raced with a concurrent delete; the next loop iteration
                // re-issues the create.
                DescribeTableError::ResourceNotFoundException(_) => Ok(TableReadiness::Creating),
                other => Err(BootstrapError::Fatal(format!(
                    "DescribeTable failed: {other:?}"
                ))),
            },
        }
    }
}

/// CREATING means retry; every other status (including a store that omits
/// the status) is treated as usable.
fn readiness_from_status(status: Option<TableStatus>) -> TableReadiness {
    match status {
        Some(TableStatus::Creating) => TableReadiness::Creating,
        _ => TableReadiness::Ready,
    }
}
