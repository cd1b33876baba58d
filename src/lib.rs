//! A minimal constructor-injection composition pattern: an immutable
//! [`IdentifiedValue`] wrapping one integer identifier, and a [`Container`]
//! holding exactly one such value by exclusive ownership.

pub mod domain;
pub mod ports;

// Domain types - value objects and models
pub use domain::{Container, IdentifiedValue};

// Port traits - narrow capability seams
pub use ports::{Holds, Identified};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{Container, Holds, Identified, IdentifiedValue};
}
