use std::collections::HashMap;

/// The single hash-key attribute every table in this service uses.
pub const PRIMARY_KEY: &str = "_id";

/// A stored item in the store's native representation.
///
/// The persisted layout is all string attributes, so the neutral form is a
/// plain string map; the DynamoDB backend lifts these to `AttributeValue::S`
/// at the wire edge.
pub type Item = HashMap<String, String>;

/// Single-attribute equality filter used for point lookups and deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFilter {
    pub attribute: &'static str,
    pub value: String,
}

impl KeyFilter {
    pub fn new(attribute: &'static str, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }
}

/// Predicate for filtered scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanCondition {
    /// The attribute exists and is a non-empty string.
    NonEmpty(&'static str),
}

impl ScanCondition {
    /// Evaluates the condition against an item.
    ///
    /// Backends that push the predicate down to the store (DynamoDB) must
    /// match these semantics: a missing attribute never matches.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ScanCondition::NonEmpty(attribute) => {
                item.get(*attribute).is_some_and(|value| !value.is_empty())
            }
        }
    }
}
