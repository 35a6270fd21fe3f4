//! The "object" entity: record type, attribute codec and repository.

pub mod codec;
mod repository;
mod types;

pub use repository::ObjectRepository;
pub use types::ObjectRecord;
