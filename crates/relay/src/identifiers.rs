//! Newtype identifiers.
//!
//! Function names arrive from request paths and query strings; invocation ids
//! are generated locally. Wrapping both keeps them from being interchanged with
//! arbitrary strings in handler signatures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of a hosted function as registered with the listener
/// (e.g. `"EventGridTrigger"`).
///
/// Function names are matched case-insensitively, mirroring the Functions
/// host; [`FunctionName::key`] yields the normalised lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionName(pub(crate) String);

impl FunctionName {
    /// Creates a new function name, returning `None` if the value is blank.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.trim().is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the name as a string slice, exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the case-insensitive lookup key for this name.
    pub fn key(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a single handler invocation.
///
/// Generated fresh for every inbound delivery; recorded on the invocation span
/// so every log line from one delivery can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(Uuid);

impl InvocationId {
    /// Generates a new random invocation identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
