//! Request payloads for the object resource.
//!
//! Field validation runs here, at the request layer; the repository never
//! re-validates (it trusts the candidate record it is handed).

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use shelf_core::object::ObjectRecord;

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 50;

/// Validation failures on a request payload, mapped to 400 by handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters")]
    NameLength,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let length = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::NameLength);
    }
    Ok(())
}

/// Request payload for creating a new object.
#[derive(Debug, Deserialize)]
pub struct CreateObject {
    pub name: String,
}

impl CreateObject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }

    /// Converts the payload into a candidate record with a fresh id.
    /// Timestamps are stamped by the repository on create.
    pub fn into_record(self) -> ObjectRecord {
        ObjectRecord::new(self.name)
    }
}

/// Request payload for updating an object's name.
#[derive(Debug, Deserialize)]
pub struct UpdateObject {
    pub name: String,
}

impl UpdateObject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }

    /// Converts the payload into a candidate record for the given id.
    /// Only `name` survives the repository's read-modify-write merge.
    pub fn into_record(self, id: Uuid) -> ObjectRecord {
        ObjectRecord::new(self.name).with_id(id)
    }
}
