//! Defines the `Entry` contact record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact record: a name, a phone number, and an email address.
///
/// Fields carry no invariants of their own (empty strings are permitted)
/// and are public so an entry can be edited in place. The field names
/// deliberately match the required CSV column headers (`name`,
/// `phone_number`, `email`) so rows deserialize straight into an `Entry`;
/// unknown CSV columns are ignored by serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl Entry {
    /// Creates a new `Entry` from the three given fields. No validation is
    /// performed; this never fails.
    pub fn new(name: &str, phone_number: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.phone_number, self.email)
    }
}
