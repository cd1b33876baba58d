use serde::{Deserialize, Serialize};

/// An immutable value carrying a single integer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifiedValue(i64);

impl IdentifiedValue {
    /// Create a new IdentifiedValue wrapping the given identifier
    ///
    /// Any `i64` is accepted; no range restriction applies.
    pub fn new(identifier: i64) -> Self {
        Self(identifier)
    }

    /// Get the stored identifier
    pub fn identifier(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for IdentifiedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for IdentifiedValue {
    fn from(identifier: i64) -> Self {
        Self::new(identifier)
    }
}
