use crate::domain::{models::Container, value_objects::IdentifiedValue};

/// Port for anything carrying an integer identifier
pub trait Identified {
    /// Get the identifier
    fn identifier(&self) -> i64;
}

/// Port for anything holding a single value by exclusive ownership
pub trait Holds {
    type Value;

    /// Get a reference to the held value
    fn value(&self) -> &Self::Value;
}

impl Identified for IdentifiedValue {
    fn identifier(&self) -> i64 {
        IdentifiedValue::identifier(self)
    }
}

impl Holds for Container {
    type Value = IdentifiedValue;

    fn value(&self) -> &IdentifiedValue {
        Container::value(self)
    }
}
