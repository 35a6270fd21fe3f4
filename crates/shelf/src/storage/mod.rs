//! Store backend implementations.
//!
//! Concrete implementations of `shelf_core::storage::StoreClient`, selected
//! at compile time via feature flags:
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: HashMap-backed store for local development
//!
//! The in-memory store is always compiled for tests, which exercise the
//! router and repository without a store process.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;
