pub mod models;
pub mod value_objects;

// Re-export commonly used types
pub use models::Container;
pub use value_objects::IdentifiedValue;
