//! DynamoDB store backend.
//!
//! The only code in the service that talks to DynamoDB: the `StoreClient`
//! implementation, the attribute conversions at the SDK edge, SDK error
//! mapping, and the idempotent table bootstrap.

pub mod bootstrap;
mod conversions;
mod error;
mod store;

pub use store::DynamoStore;

use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Creates a DynamoDB client from the application configuration.
///
/// Uses the AWS SDK default credential chain; an `AWS_ENDPOINT_URL` in the
/// config points the client at a local DynamoDB.
pub async fn create_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}
