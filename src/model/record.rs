//! JSON records with a configurable identity key.

use super::Updatable;
use serde_json::Value;
use std::fmt;

/// A JSON value paired with the value that identifies it across snapshots.
///
/// When built with a key, identity is the value of that top-level field and
/// content is the whole record, so `{"id": 3, "name": "a"}` and
/// `{"id": 3, "name": "b"}` diff as a reload. Without a key the whole value
/// is the identity and records can only be inserted or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    identity: Value,
    value: Value,
}

impl Record {
    /// Build a record identified by its full value.
    #[must_use]
    pub fn whole(value: Value) -> Self {
        Self {
            identity: value.clone(),
            value,
        }
    }

    /// Build a record identified by the top-level field `key`.
    ///
    /// Returns `None` if `value` is not an object or has no such field.
    #[must_use]
    pub fn keyed(value: Value, key: &str) -> Option<Self> {
        let identity = value.as_object()?.get(key)?.clone();
        Some(Self { identity, value })
    }

    /// Build a record keyed by `key` when given, otherwise by its full value.
    #[must_use]
    pub fn from_value(value: Value, key: Option<&str>) -> Option<Self> {
        match key {
            Some(key) => Self::keyed(value, key),
            None => Some(Self::whole(value)),
        }
    }

    /// The identity value.
    #[must_use]
    pub const fn identity(&self) -> &Value {
        &self.identity
    }

    /// The full record.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the record, returning the full value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl Updatable for Record {
    fn same_identity(&self, other: &Self) -> bool {
        self.identity == other.identity
    }

    fn same_content(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
