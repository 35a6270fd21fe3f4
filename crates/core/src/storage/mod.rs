//! Storage contracts shared by every store backend.
//!
//! The [`StoreClient`] trait is the capability boundary between the object
//! repository and a concrete store: point-read, filtered scan, upsert and
//! delete over a table name. Backends live in the binary crate.

mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, StorageError};
pub use http_mapping::storage_error_to_status_code;
pub use traits::StoreClient;
pub use types::{Item, KeyFilter, ScanCondition, PRIMARY_KEY};
