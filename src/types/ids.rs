//! Newtype wrapper for candidate identifiers.
//!
//! Entries are identified by opaque strings chosen by the hosting application
//! (movie titles, usually). The newtype keeps them from being confused with
//! other strings and gives serde a transparent representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate entry competing in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Creates a new EntryId from a string.
    ///
    /// Note: This does not validate or normalize the identifier. Two entries
    /// are the same candidate iff their identifiers compare equal.
    pub fn new(s: impl Into<String>) -> Self {
        EntryId(s.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId(s.to_string())
    }
}
