use serde::{Deserialize, Serialize};

use crate::domain::value_objects::IdentifiedValue;

/// Holds exactly one [`IdentifiedValue`], supplied at construction
///
/// The container owns its value exclusively and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Container {
    value: IdentifiedValue,
}

impl Container {
    /// Create a new Container taking ownership of the given value
    pub fn new(value: IdentifiedValue) -> Self {
        Self { value }
    }

    /// Get a reference to the held value
    pub fn value(&self) -> &IdentifiedValue {
        &self.value
    }

    /// Consume the container, releasing ownership of the held value
    pub fn into_value(self) -> IdentifiedValue {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_held_value() {
        let value = IdentifiedValue::new(7);
        let container = Container::new(value);

        assert_eq!(container.value(), &value);
        assert_eq!(container.value().identifier(), 7);
    }

    #[test]
    fn test_value_borrows_stored_instance() {
        let container = Container::new(IdentifiedValue::new(3));

        // Repeated accessor calls borrow the same stored value
        assert!(std::ptr::eq(container.value(), container.value()));
    }

    #[test]
    fn test_into_value() {
        let container = Container::new(IdentifiedValue::new(11));
        assert_eq!(container.into_value().identifier(), 11);
    }
}
