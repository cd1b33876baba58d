mod identified_value;

pub use identified_value::IdentifiedValue;
